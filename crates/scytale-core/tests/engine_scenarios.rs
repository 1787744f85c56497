use scytale_core::{
    CipherKind, CipherRegistry, CipherRequest, Direction, InvalidKey, RequestPayload, ScytaleError,
};

#[test]
fn test_caesar_hello_khoor() {
    let registry = CipherRegistry::new();
    let encrypted = registry
        .encrypt("ceasar_cipher", "hello", "3")
        .expect("encrypt should succeed");
    assert_eq!(encrypted, "khoor");

    let decrypted = registry
        .decrypt("ceasar_cipher", "khoor", "3")
        .expect("decrypt should succeed");
    assert_eq!(decrypted, "hello");
}

#[test]
fn test_columnar_hello_ray() {
    let registry = CipherRegistry::new();
    let encrypted = registry
        .encrypt("columnar_transposition_cipher", "hello", "ray")
        .expect("encrypt should succeed");
    assert_eq!(encrypted, "eohllq");
    assert_eq!(encrypted.len() % 3, 0);

    let decrypted = registry
        .decrypt("columnar_transposition_cipher", &encrypted, "ray")
        .expect("decrypt should succeed");
    assert_eq!(decrypted, "hello");
}

#[test]
fn test_vigenere_fade_cab() {
    let registry = CipherRegistry::new();
    let encrypted = registry
        .encrypt("vigenere_cipher", "fade", "cab")
        .expect("encrypt should succeed");
    assert_eq!(encrypted, "haeg");
}

#[test]
fn test_rejected_keys() {
    let registry = CipherRegistry::new();
    let cases = [
        ("ceasar_cipher", "3a", InvalidKey::NotNumeric),
        ("ceasar_cipher", "", InvalidKey::NotNumeric),
        (
            "columnar_transposition_cipher",
            "aaa",
            InvalidKey::InsufficientUniqueChars,
        ),
        ("vigenere_cipher", "123", InvalidKey::NoAlphaChar),
    ];

    for (method, key, expected) in cases {
        for direction in [Direction::Encrypt, Direction::Decrypt] {
            let kind: CipherKind = method.parse().expect("method should parse");
            let result = registry.dispatch(kind, direction, "hello", key);
            assert_eq!(
                result,
                Err(ScytaleError::InvalidKey(expected)),
                "{method} {direction} with key {key:?}"
            );
        }
    }
}

#[test]
fn test_vigenere_accepts_key_with_one_letter() {
    let registry = CipherRegistry::new();
    let encrypted = registry
        .encrypt("vigenere_cipher", "hello", "1b2")
        .expect("key with a single letter should validate");
    assert_eq!(encrypted, "ifmmp");
}

#[test]
fn test_unsupported_characters_rejected_by_every_cipher() {
    let registry = CipherRegistry::new();
    let keys = [
        (CipherKind::Caesar, "3"),
        (CipherKind::Columnar, "ray"),
        (CipherKind::Vigenere, "cab"),
    ];

    for (kind, key) in keys {
        let result = registry.dispatch(kind, Direction::Encrypt, "hello world", key);
        assert_eq!(
            result,
            Err(ScytaleError::UnsupportedCharacter {
                character: ' ',
                index: 5
            }),
            "{kind}"
        );
    }
}

#[test]
fn test_identical_requests_give_identical_output() {
    let registry = CipherRegistry::new();
    let request =
        CipherRequest::new(CipherKind::Columnar, Direction::Encrypt, "determinism", "key");
    let first = registry.handle(&request).expect("first call should succeed");
    let second = registry.handle(&request).expect("second call should succeed");
    assert_eq!(first, second);
}

#[test]
fn test_client_payload_end_to_end() {
    let registry = CipherRegistry::new();
    let payload = RequestPayload::from_json(
        r#"{"userInput":"eohllq","key":"ray","encryptFlag":"decrypt"}"#,
    )
    .expect("payload should parse");
    let response = registry
        .handle_payload("columnar_transposition_cipher", payload)
        .expect("request should succeed");
    assert_eq!(
        response.to_json().expect("response should serialize"),
        r#"{"text":"hello"}"#
    );
}

#[test]
fn test_registry_is_shareable_across_threads() {
    let registry = CipherRegistry::new();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|shift| {
                let registry = &registry;
                scope.spawn(move || {
                    registry
                        .encrypt("ceasar_cipher", "abc", &shift.to_string())
                        .expect("encrypt should succeed")
                })
            })
            .collect();
        let results: Vec<String> = handles
            .into_iter()
            .map(|h| h.join().expect("thread should not panic"))
            .collect();
        assert_eq!(results, vec!["abc", "bcd", "cde", "def"]);
    });
}
