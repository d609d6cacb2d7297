mod password;

pub(crate) const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";
