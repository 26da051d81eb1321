use codebook::{
    config::DEMO_MESSAGE,
    morse::{decode, encode, symbols, MorseError},
    value::decode_value,
    ErrorKind,
};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use serde_json::json;

#[test]
fn decode_every_symbol() {
    for (c, code) in symbols() {
        let expected = if c == ' ' { String::new() } else { c.to_string() };
        assert_eq!(decode(code).unwrap(), expected, "{code:?}");
    }
}

#[test]
fn encode_then_decode_single_characters() {
    for (c, _) in symbols().filter(|(c, _)| *c != ' ') {
        assert_eq!(decode(&encode(&c.to_string()).unwrap()).unwrap(), c.to_string());
    }
}

#[test]
fn decode_whole_alphabet() {
    let morse = ".- -... -.-. -.. . ..-. --. .... .. .--- -.- .-.. -- -. --- \
                 .--. --.- .-. ... - ..- ...- .-- -..- -.-- --.. .---- ..--- \
                 ...-- ....- ..... -.... --... ---.. ----. ----- --..-- .-.-.- \
                 ..--.. -..-. -....- -.--. -.--.-";
    assert_eq!(
        decode(morse).unwrap(),
        "ABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890,.?/-()"
    );
}

#[test]
fn random_messages_round_trip() {
    let mut rng = StdRng::seed_from_u64(12345u64);
    let alphabet: Vec<char> = symbols().map(|(c, _)| c).filter(|c| *c != ' ').collect();
    for _ in 0..100 {
        let len = rng.gen_range(1..40);
        let message: String = (0..len)
            .map(|_| *alphabet.choose(&mut rng).unwrap())
            .collect();
        assert_eq!(decode(&encode(&message).unwrap()).unwrap(), message);
    }
}

#[test]
fn demo_message_round_trips() {
    let decoded = decode(DEMO_MESSAGE).unwrap();
    assert_eq!(decoded, "MAI-PYTHON-2019");
    assert_eq!(encode(&decoded).unwrap(), DEMO_MESSAGE);
}

#[test]
fn unknown_tokens() {
    for token in [".-.-.-.-.-.-", "#@!~"] {
        let err = decode(token).unwrap_err();
        assert_eq!(
            err,
            MorseError::UnknownToken {
                token: token.to_string(),
                position: 0
            }
        );
        assert_eq!(err.kind(), ErrorKind::Lookup);
    }
}

#[test]
fn lowercase_is_not_encoded() {
    let err = encode("a").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Lookup);
    assert_eq!(encode(&"a".to_uppercase()).unwrap(), ".-");
}

#[test]
fn non_text_is_a_type_error() {
    for value in [json!(10), json!([".-"]), json!(null)] {
        assert_eq!(decode_value(&value).unwrap_err().kind(), ErrorKind::Type);
    }
}
