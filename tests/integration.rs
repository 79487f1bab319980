use persevere_auth::utils::logging::setup_logging;
use persevere_auth::{
    AuthConfig, AuthError, Authenticator, Directory, PASSWORD1, PASSWORD2, PASSWORD3, USER1,
    USER2, USER3, credentials_match, email_is_valid, password_is_valid, user_is_registered,
};

#[test]
fn test_email_domains() {
    assert!(email_is_valid("kyle.rose@perseverenow.org"));
    assert!(email_is_valid("your.name.prsvr@gmail.com"));
    assert!(!email_is_valid("kyle.rose@gmail.com"));
    assert!(!email_is_valid("kyle@fake.com"));
}

#[test]
fn test_email_requires_character_before_domain() {
    for valid in [
        "krose@perseverenow.org",
        "c@perseverenow.org",
        "m.prsvr@gmail.com",
        " .prsvr@gmail.com",
    ] {
        assert!(email_is_valid(valid), "Should accept: {}", valid);
    }
    for invalid in ["@perseverenow.org", ".prsvr@gmail.com"] {
        assert!(!email_is_valid(invalid), "Should reject: {}", invalid);
    }
}

#[test]
fn test_password_rules() {
    let cases = vec![
        ("Long enough!", true),
        ("Barely!!", true),
        ("Almost!", false),
        ("But no", false),
        ("MOSTLY yelling", true),
        ("Just one capital letter.", true),
        ("not one caps", false),
        ("lowercase 4 lyfe", false),
        ("welcome to Smallville, population: this sentence", true),
        ("MOSTLY BIG i GUESS", true),
        ("TROLL ALERT", false),
        ("HULK SMASH", false),
    ];

    for (password, expected) in cases {
        assert_eq!(password_is_valid(password), expected, "Failed for: {}", password);
    }
}

#[test]
fn test_registered_users() {
    let dir = Directory::shared();
    assert!(user_is_registered(dir, "krose@perseverenow.org"));
    assert!(user_is_registered(dir, "jdoty@perseverenow.org"));
    assert!(!user_is_registered(dir, "anyone.else@perseverenow.org"));
    assert!(!user_is_registered(dir, "i.mean.literally.anyone.prsvr@gmail.com"));
}

#[test]
fn test_credentials_match() {
    let dir = Directory::shared();
    assert!(credentials_match(dir, USER1, PASSWORD1));
    assert!(credentials_match(dir, USER2, PASSWORD2));
    assert!(credentials_match(dir, USER3, PASSWORD3));
    assert!(!credentials_match(dir, USER1, "NOT my password"));
    assert!(!credentials_match(dir, USER2, "nor HERS"));
    assert!(!credentials_match(dir, USER3, "and not his EITHER"));
    assert!(!credentials_match(dir, USER1, PASSWORD2));
    assert!(!credentials_match(dir, USER2, PASSWORD3));
    assert!(!credentials_match(dir, USER3, PASSWORD1));
}

#[test]
fn test_repeated_calls_agree() {
    let dir = Directory::shared();
    for _ in 0..3 {
        assert!(email_is_valid(USER1));
        assert!(!password_is_valid("TROLL ALERT"));
        assert!(user_is_registered(dir, USER3));
        assert!(!credentials_match(dir, USER3, PASSWORD1));
    }
}

#[test]
fn test_authenticator_from_config() {
    setup_logging();

    let config = AuthConfig::parse(
        r#"
        [[users]]
        identifier = "ada@perseverenow.org"
        secret = "Analytical"
        "#,
    )
    .unwrap();
    let auth = Authenticator::from_config(&config).unwrap();

    assert!(auth.credentials_match("ada@perseverenow.org", "Analytical"));
    assert!(!auth.user_is_registered(USER1));
    assert_eq!(
        auth.authenticate(USER1, PASSWORD1),
        Err(AuthError::UserNotFound(USER1.to_string()))
    );
    assert!(auth.authenticate("ada@perseverenow.org", "Analytical").is_ok());
}

#[test]
fn test_incomplete_user_entry_fails_at_load() {
    let result = AuthConfig::parse(
        r#"
        [[users]]
        identifier = "ada@perseverenow.org"

        [[users]]
        identifier = "grace.prsvr@gmail.com"
        secret = "Compiler1"
        "#,
    );
    assert!(result.is_err());
}
