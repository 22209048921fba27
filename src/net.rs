//! Ad-hoc network helpers.

use rand::Rng;

/// Pick a random port for a short-lived local server.
pub fn random_port() -> u16 {
    rand::thread_rng().gen_range(1000..=9000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_port_stays_in_range() {
        for _ in 0..100 {
            let port = random_port();
            assert!((1000..=9000).contains(&port));
        }
    }
}
