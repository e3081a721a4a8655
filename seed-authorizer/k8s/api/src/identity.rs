//! Identities used by gardenlets when talking to the Gardener API server.

/// The group that every gardenlet's user belongs to.
pub const SEEDS_GROUP: &str = "gardener.cloud:system:seeds";

/// The prefix of a gardenlet's user name. The seed name follows the prefix.
pub const SEED_USER_PREFIX: &str = "gardener.cloud:system:seed:";

/// Used as the seed name by gardenlets that may act on behalf of any seed.
pub const AMBIGUOUS_SEED_NAME: &str = "<ambiguous>";

/// Extracts the seed name from a gardenlet user name.
///
/// Returns `None` if the user is not a gardenlet or if the seed name is empty.
pub fn seed_name(user: &str) -> Option<&str> {
    user.strip_prefix(SEED_USER_PREFIX)
        .filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_seed_users() {
        assert_eq!(seed_name("gardener.cloud:system:seed:aws-eu1"), Some("aws-eu1"));
        assert_eq!(seed_name("gardener.cloud:system:seed:"), None);
        assert_eq!(seed_name("system:serviceaccount:garden:gardenlet"), None);
    }
}
