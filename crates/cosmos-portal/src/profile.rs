use cosmos_client::{IdentityProvider, identity::resolve_email};
use cosmos_config::ProfileConfig;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub display_name: String,
    pub email: String,
    pub initials: String,
}

/// Profile card. Reads configuration and the caller identity; no network.
#[must_use]
pub fn load_profile(identity: &dyn IdentityProvider, profile: &ProfileConfig) -> Profile {
    Profile {
        display_name: profile.display_name.clone(),
        email: resolve_email(identity),
        initials: profile.initials(),
    }
}

#[cfg(test)]
mod tests {
    use cosmos_client::{PLACEHOLDER_EMAIL, StaticIdentity};

    use super::*;

    #[test]
    fn default_profile_for_anonymous_caller() {
        let profile = load_profile(&StaticIdentity::anonymous(), &ProfileConfig::default());
        assert_eq!(profile.display_name, "Alex Vercel");
        assert_eq!(profile.initials, "AV");
        assert_eq!(profile.email, PLACEHOLDER_EMAIL);
    }

    #[test]
    fn known_identity_is_shown() {
        let profile = load_profile(
            &StaticIdentity::new("alex@example.com"),
            &ProfileConfig::default(),
        );
        assert_eq!(profile.email, "alex@example.com");
    }
}
