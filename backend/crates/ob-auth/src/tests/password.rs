use crate::{hash_password, verify_password};

use googletest::prelude::*;

#[test]
fn given_password_when_hashed_then_lowercase_hex_sha256() {
    assert_that!(
        hash_password("password"),
        eq("5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8")
    );
}

#[test]
fn given_wrong_password_when_verified_then_rejected() {
    let stored = hash_password("correct horse");

    assert_that!(verify_password("correct horse", &stored), eq(true));
    assert_that!(verify_password("Correct horse", &stored), eq(false));
}
