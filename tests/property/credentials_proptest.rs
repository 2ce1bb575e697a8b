//! Property tests for password hashing and bearer tokens

use proptest::prelude::*;
use ritualos::backend::auth::CredentialService;
use uuid::Uuid;

const SECRET: &str = "property-test-secret-0123456789";
const BASE64URL: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

fn service() -> CredentialService {
    CredentialService::new(SECRET, 4)
}

proptest! {
    #[test]
    fn prop_token_round_trip(id in any::<u128>(), local in "[a-z]{1,12}") {
        let credentials = service();
        let user_id = Uuid::from_u128(id);
        let email = format!("{}@example.com", local);

        let token = credentials.issue_token(user_id, &email).unwrap();
        let claims = credentials.verify_token(&token).unwrap();
        prop_assert_eq!(claims.user_id(), Some(user_id));
        prop_assert_eq!(claims.email, email);
        prop_assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
    }

    #[test]
    fn prop_tampered_token_rejected(id in any::<u128>(), position in any::<prop::sample::Index>(), replacement in 0usize..64) {
        let credentials = service();
        let token = credentials.issue_token(Uuid::from_u128(id), "tamper@example.com").unwrap();

        // The final character carries padding bits, so leave it alone
        let candidates: Vec<usize> = token
            .char_indices()
            .filter(|(i, c)| *c != '.' && *i + 1 < token.len())
            .map(|(i, _)| i)
            .collect();
        let at = candidates[position.index(candidates.len())];
        let original = token.as_bytes()[at];
        let mut replacement = BASE64URL[replacement];
        if replacement == original {
            replacement = if original == b'A' { b'B' } else { b'A' };
        }

        let mut bytes = token.into_bytes();
        bytes[at] = replacement;
        let tampered = String::from_utf8(bytes).unwrap();
        prop_assert!(credentials.verify_token(&tampered).is_none());
    }

    #[test]
    fn prop_foreign_secret_rejected(id in any::<u128>(), other in "[a-z0-9]{16,32}") {
        prop_assume!(other != SECRET);
        let token = service().issue_token(Uuid::from_u128(id), "a@example.com").unwrap();
        prop_assert!(CredentialService::new(&other, 4).verify_token(&token).is_none());
    }
}

proptest! {
    // bcrypt is slow even at the minimum cost
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn prop_password_verifies_only_itself(password in "[ -~]{1,72}", suffix in "[ -~]{0,30}") {
        let credentials = service();
        let hash = credentials.hash(&password).unwrap();
        prop_assert!(credentials.verify(&password, &hash));
        // Anything longer, including input sharing all 72 bytes, is another password
        let other = format!("{}{}", password, suffix);
        if other != password {
            prop_assert!(!credentials.verify(&other, &hash));
        }
    }
}
