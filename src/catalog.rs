//! Creation of placed pieces.

use crate::board::{Occupant, Piece, PieceKind, Player, Sprite};
use crate::host::Host;

/// Create an occupant for `owner` of the given kind.
///
/// Loads the piece texture (`w_`/`b_` prefix plus the kind name) through the
/// host and sizes the sprite to `piece_size` pixels. The position is left at
/// the origin; callers move it onto its square.
pub fn piece_for_player<H>(host: &mut H, owner: Player, kind: PieceKind, piece_size: u32) -> Occupant
where
    H: Host + ?Sized,
{
    let piece = Piece::new(owner, kind);
    let texture_name = piece.texture_name();
    let texture = host.load_texture(&texture_name);
    Occupant::new(
        piece,
        Sprite {
            texture: Some(texture),
            texture_name,
            size: piece_size,
            position: (0, 0),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HeadlessHost;

    #[test]
    fn test_piece_carries_tag_owner_and_texture() {
        let mut host = HeadlessHost::new();
        let occupant = piece_for_player(&mut host, Player::Black, PieceKind::Bishop, 48);

        assert_eq!(occupant.tag(), 131);
        assert_eq!(occupant.owner(), Player::Black);
        assert_eq!(occupant.sprite().size, 48);
        assert_eq!(occupant.sprite().texture_name, "b_bishop.png");
        let texture = occupant.sprite().texture.unwrap();
        assert_eq!(host.texture_name(texture), Some("b_bishop.png"));
    }

    #[test]
    fn test_every_kind_for_both_players() {
        let mut host = HeadlessHost::new();
        for owner in Player::BOTH {
            for kind in PieceKind::ALL {
                let occupant = piece_for_player(&mut host, owner, kind, 64);
                assert_eq!(occupant.piece(), Piece::new(owner, kind));
                assert_eq!(
                    occupant.tag(),
                    kind.ordinal() + owner.index() as u8 * Piece::PLAYER_TAG_OFFSET
                );
            }
        }
        assert_eq!(host.distinct_textures(), 12);
    }
}
