use rand::{rngs::StdRng, Rng, SeedableRng};

use optional::{Maybe, Optional};

const ROUNDS: usize = 256;

fn random_optional(rng: &mut StdRng) -> Optional<i64> {
    // Roughly a quarter absent; zero shows up often enough to matter.
    match rng.gen_range(0..4) {
        0 => Optional::of(None),
        1 => Optional::of(Some(0)),
        _ => Optional::of(Some(rng.gen_range(-1_000..1_000))),
    }
}

#[test]
fn of_some_always_round_trips() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..ROUNDS {
        let v: i64 = rng.gen();
        let o = Optional::of(Some(v));
        assert!(o.is_present());
        assert_eq!(o.get(), Ok(v));
    }
}

#[test]
fn map_keeps_presence() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..ROUNDS {
        let o = random_optional(&mut rng);
        let mapped = o.map(|x| x.wrapping_mul(3));
        assert_eq!(mapped.is_present(), o.is_present());
    }
}

#[test]
fn map_nullable_is_empty_exactly_when_mapper_says_so() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..ROUNDS {
        let o = random_optional(&mut rng);
        let even_only = |x: i64| if x % 2 == 0 { Some(x / 2) } else { None };
        let expected = o.into_option().and_then(even_only);
        assert_eq!(o.map_nullable(even_only).into_option(), expected);
    }
}

#[test]
fn filter_agrees_with_predicate() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..ROUNDS {
        let o = random_optional(&mut rng);
        let threshold: i64 = rng.gen_range(-1_000..1_000);
        let kept = o.filter(|x| *x > threshold);
        match o.into_option() {
            Some(v) if v > threshold => assert_eq!(kept.get(), Ok(v)),
            _ => assert!(kept.is_empty()),
        }
    }
}

#[test]
fn or_else_and_or_pick_the_same_branch() {
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..ROUNDS {
        let o = random_optional(&mut rng);
        let fallback: i64 = rng.gen();
        assert_eq!(o.or_else(fallback), o.or(|| Optional::of(Some(fallback))).or_else(fallback ^ 1));
        assert_eq!(o.or_else(fallback), o.or_else_get(|| fallback));
    }
}

#[test]
fn flat_map_of_is_map() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..ROUNDS {
        let o = random_optional(&mut rng);
        let f = |x: i64| x.saturating_add(5);
        assert_eq!(o.flat_map(|x| Optional::of(Some(f(x)))), o.map(f));
    }
}
