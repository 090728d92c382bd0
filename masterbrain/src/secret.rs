use masterbrain_types::{Code, Color, ALL_COLORS, CODE_LENGTH};
use rand::{seq::SliceRandom, Rng};

/// Draw a secret of distinct colors.
/// Colors are picked uniformly and redrawn while they repeat one already chosen.
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Code {
    let mut colors = [Color::Black; CODE_LENGTH];
    for idx in 0..CODE_LENGTH {
        colors[idx] = loop {
            let c = ALL_COLORS.choose(rng).copied().unwrap_or(Color::Black);
            if !colors[..idx].contains(&c) {
                break c;
            }
        };
    }
    Code(colors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use masterbrain_types::PALETTE_SIZE;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    #[test]
    fn secrets_are_distinct() {
        let mut rng = XorShiftRng::seed_from_u64(7);
        for _ in 0..1000 {
            let secret = generate(&mut rng);
            assert!(secret.has_distinct_colors(), "{secret:?}");
            assert!(secret.iter().all(|c| ALL_COLORS.contains(c)));
        }
    }

    #[test]
    fn same_seed_same_secret() {
        let a = generate(&mut XorShiftRng::seed_from_u64(42));
        let b = generate(&mut XorShiftRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn every_color_shows_up() {
        let mut rng = XorShiftRng::seed_from_u64(3);
        let mut seen = [false; PALETTE_SIZE];
        for _ in 0..200 {
            for c in generate(&mut rng).iter() {
                seen[c.index()] = true;
            }
        }
        assert!(seen.iter().all(|s| *s));
    }
}
