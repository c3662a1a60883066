use super::*;
use std::io::Cursor;

fn collect(script: &str, players: usize) -> (Result<Vec<Player>, CollectError>, String) {
    collect_bytes(script.as_bytes(), players)
}

fn collect_bytes(script: &[u8], players: usize) -> (Result<Vec<Player>, CollectError>, String) {
    let mut input = Cursor::new(script.to_vec());
    let mut out = Vec::new();
    let result = run_stage2(&Stage2Params { players }, &mut input, &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_parse_wildcard_position_accepts_range() {
    assert_eq!(parse_wildcard_position("5").unwrap().get(), 5);
    assert_eq!(parse_wildcard_position("20").unwrap().get(), 20);
    assert_eq!(parse_wildcard_position("+7").unwrap().get(), 7);
}

#[test]
fn test_parse_wildcard_position_rejections() {
    assert_eq!(parse_wildcard_position(""), Err(InputFormatError::Empty));
    assert_eq!(parse_wildcard_position("abc"), Err(InputFormatError::NotANumber));
    assert_eq!(parse_wildcard_position(" 7"), Err(InputFormatError::NotANumber));
    assert_eq!(
        parse_wildcard_position("99999999999"),
        Err(InputFormatError::NotANumber)
    );
    assert_eq!(parse_wildcard_position("4"), Err(InputFormatError::OutOfRange(4)));
    assert_eq!(parse_wildcard_position("21"), Err(InputFormatError::OutOfRange(21)));
    assert_eq!(parse_wildcard_position("-6"), Err(InputFormatError::OutOfRange(-6)));
}

#[test]
fn test_collects_one_player() {
    let (result, out) = collect("Alice\nBob\nWrong\n7\nDex\n", 1);
    let players = result.unwrap();
    assert_eq!(players.len(), 1);

    let p = &players[0];
    assert_eq!(p.name, "Player 1");
    assert_eq!(p.score, 0);
    assert_eq!(p.prediction.first, "Alice");
    assert_eq!(p.prediction.second, "Bob");
    assert_eq!(p.prediction.third, "Wrong");
    assert_eq!(p.prediction.wildcard_position.get(), 7);
    assert_eq!(p.prediction.wildcard_rider, "Dex");

    let expected = "\nPlayer 1: Enter your predictions.\n\
                    Enter your 1st place rider: \
                    Enter your 2nd place rider: \
                    Enter your 3rd place rider: \
                    Enter your wildcard position (5-20): \
                    Enter your wildcard rider: ";
    assert_eq!(out, expected);
}

#[test]
fn test_wildcard_reprompts_until_valid() {
    let (result, out) = collect("A\nB\nC\n\nfour\n4\n21\n12\nW\n", 1);
    let players = result.unwrap();
    assert_eq!(players[0].prediction.wildcard_position.get(), 12);
    assert_eq!(players[0].prediction.wildcard_rider, "W");

    assert_eq!(out.matches("Enter your wildcard position (5-20): ").count(), 5);
    assert!(out.contains(
        "Wildcard position cannot be empty. Please enter a number between 5 and 20.\n"
    ));
    assert!(out.contains("Invalid input. Please enter a valid number.\n"));
    assert_eq!(
        out.matches("Invalid range. Please enter a number between 5 and 20.\n")
            .count(),
        2
    );
}

#[test]
fn test_collects_configured_player_count_in_order() {
    let script = "A1\nB1\nC1\n5\nW1\nA2\nB2\nC2\n6\nW2\n";
    let (result, out) = collect(script, 2);
    let players = result.unwrap();
    assert_eq!(players.len(), 2);
    assert_eq!(players[0].name, "Player 1");
    assert_eq!(players[1].name, "Player 2");
    assert_eq!(players[1].prediction.first, "A2");
    assert!(out.contains("\nPlayer 2: Enter your predictions.\n"));
}

#[test]
fn test_rider_guesses_are_kept_verbatim() {
    let (result, _) = collect(" Alice \r\nbob\r\n\r\n5\r\nDex \r\n", 1);
    let p = &result.unwrap()[0];
    assert_eq!(p.prediction.first, " Alice ");
    assert_eq!(p.prediction.second, "bob");
    assert_eq!(p.prediction.third, "");
    assert_eq!(p.prediction.wildcard_rider, "Dex ");
}

#[test]
fn test_input_closed_during_wildcard_retry() {
    let (result, _) = collect("A\nB\nC\n4\n", 1);
    match result {
        Err(CollectError::InputClosed { prompt }) => {
            assert_eq!(prompt, "Enter your wildcard position (5-20)");
        }
        other => panic!("expected InputClosed, got {other:?}"),
    }
}

#[test]
fn test_input_closed_before_first_prompt_answer() {
    let (result, _) = collect("", 3);
    assert!(matches!(result, Err(CollectError::InputClosed { .. })));
}

#[test]
fn test_latin1_rider_guess_is_kept_lossily() {
    let (result, _) = collect_bytes(b"M\xfasquiz\nBob\nCara\n7\nDex\n", 1);
    let p = &result.unwrap()[0];
    assert_eq!(p.prediction.first, "M\u{FFFD}squiz");
    assert_eq!(p.prediction.second, "Bob");
    assert_eq!(p.prediction.wildcard_position.get(), 7);
}

#[test]
fn test_undecodable_wildcard_answer_is_reprompted() {
    let (result, out) = collect_bytes(b"A\nB\nC\n\xff\n7\nDex\n", 1);
    let p = &result.unwrap()[0];
    assert_eq!(p.prediction.wildcard_position.get(), 7);
    assert_eq!(p.prediction.wildcard_rider, "Dex");
    assert_eq!(out.matches("Enter your wildcard position (5-20): ").count(), 2);
    assert!(out.contains("Invalid input. Please enter a valid number.\n"));
}

#[test]
fn test_fullwidth_digits_are_not_a_number() {
    assert_eq!(
        parse_wildcard_position("\u{FF11}\u{FF12}"),
        Err(InputFormatError::NotANumber)
    );
}
