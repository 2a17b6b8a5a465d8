use env_logger::Env;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    chess_rules::console::run_console_loop();
}
