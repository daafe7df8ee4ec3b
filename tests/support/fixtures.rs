//! Test fixtures and constants.
//!
//! All keys are RSA 2048 exported from gpg 2.2. Alice and Bob have a
//! sign/certify primary key and an encryption subkey; Carol can only sign;
//! Dana has two encryption subkeys. Key ids are lowercase hex.

/// Alice's public key ring, armored.
pub const ALICE_PUBLIC: &[u8] = include_bytes!("../fixtures/alice.pub.asc");

/// Alice's public key ring, binary.
pub const ALICE_PUBLIC_BINARY: &[u8] = include_bytes!("../fixtures/alice.pub.gpg");

/// Alice's secret key ring, unprotected.
pub const ALICE_SECRET: &[u8] = include_bytes!("../fixtures/alice.sec.asc");

/// Alice's secret key ring, S2K protected with the empty passphrase.
pub const ALICE_SECRET_EMPTY_PASSPHRASE: &[u8] =
    include_bytes!("../fixtures/alice.sec.protected-empty.asc");

/// Alice's secret key ring, protected with [`ALICE_PASSPHRASE`].
pub const ALICE_SECRET_WITH_PASSPHRASE: &[u8] =
    include_bytes!("../fixtures/alice.sec.protected-nonempty.asc");

pub const ALICE_PASSPHRASE: &str = "correct horse";

pub const ALICE_PRIMARY_ID: &str = "feb44ebe8bb0d0e8";
pub const ALICE_SUBKEY_ID: &str = "2a30959dd59428b7";
pub const ALICE_PRIMARY_FINGERPRINT: &str = "BE9FF18966877A85E24B08B7FEB44EBE8BB0D0E8";
pub const ALICE_SUBKEY_FINGERPRINT: &str = "BE7AFF1F87E594ADD10EF36A2A30959DD59428B7";
pub const ALICE_USER_ID: &str = "Alice Example <alice@example.test>";

pub const BOB_PUBLIC: &[u8] = include_bytes!("../fixtures/bob.pub.asc");
pub const BOB_SECRET: &[u8] = include_bytes!("../fixtures/bob.sec.asc");
pub const BOB_SUBKEY_ID: &str = "56bfe20e1b81abbe";

/// Sign-only key without any encryption subkey.
pub const CAROL_PUBLIC: &[u8] = include_bytes!("../fixtures/carol.pub.asc");
pub const CAROL_SECRET: &[u8] = include_bytes!("../fixtures/carol.sec.asc");

/// Carol's ring followed by Alice's, binary.
pub const CAROL_THEN_ALICE_PUBLIC: &[u8] = include_bytes!("../fixtures/carol_then_alice.pub.gpg");

/// One ring with a sign/certify primary and two encryption subkeys, the
/// second added two seconds after the first.
pub const DANA_PUBLIC: &[u8] = include_bytes!("../fixtures/dana.pub.asc");
pub const DANA_SECRET: &[u8] = include_bytes!("../fixtures/dana.sec.asc");
pub const DANA_PRIMARY_ID: &str = "e6a8636150c8573f";
pub const DANA_FIRST_SUBKEY_ID: &str = "beace1144dabb10e";
pub const DANA_SECOND_SUBKEY_ID: &str = "26d069de9cb65767";

/// "hello world" encrypted by gpg to Dana's first encryption subkey.
pub const GPG_HELLO_DANA_FIRST_SUBKEY: &[u8] =
    include_bytes!("../fixtures/hello.gpg-dana-first-subkey.asc");

/// "hello world" encrypted by gpg to Dana, which picks her newest subkey.
pub const GPG_HELLO_DANA_NEWEST_SUBKEY: &[u8] =
    include_bytes!("../fixtures/hello.gpg-dana-newest-subkey.asc");

/// "hello world" encrypted to Alice by gpg: AES-256, SEIPD, ZLIB.
pub const GPG_HELLO_ZLIB: &[u8] = include_bytes!("../fixtures/hello.gpg-zlib.asc");

/// The same message without armor.
pub const GPG_HELLO_ZLIB_BINARY: &[u8] = include_bytes!("../fixtures/hello.gpg-zlib.gpg");

/// "hello world" encrypted to Alice by gpg with ZIP compression.
pub const GPG_HELLO_ZIP: &[u8] = include_bytes!("../fixtures/hello.gpg-zip.asc");

/// "hello world" encrypted to Alice by gpg with CAST5, no MDC (tag 9).
pub const GPG_HELLO_CAST5_NO_MDC: &[u8] = include_bytes!("../fixtures/hello.gpg-cast5-nomdc.asc");

/// "hello world" encrypted to Alice by gpg without a compression layer.
pub const GPG_HELLO_UNCOMPRESSED: &[u8] =
    include_bytes!("../fixtures/hello.gpg-uncompressed.asc");

pub const HELLO: &[u8] = b"hello world";
