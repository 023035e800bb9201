mod common;

use std::io;

use unicode_char_finder::{CharFinder, FinderOptions, LoadState, ReservedKind, UcfError};

use common::{fixture_finder, fixture_path, fixture_text};

#[test]
fn open_reads_the_data_file() {
    let finder = fixture_finder();
    assert_eq!(finder.store().len(), 23);
    assert_eq!(finder.options().batch_size, 10);
    assert!(finder.options().data_path.ends_with("char-data.txt"));
}

#[test]
fn open_reports_missing_files() {
    let options = FinderOptions::default().with_data_path(fixture_path(&["tests", "fixtures", "missing.txt"]));
    let err = CharFinder::open(options).expect_err("missing file");
    assert!(matches!(err, UcfError::Io(_)));
    assert!(!err.is_parse_error());
}

#[test]
fn char_info_for_an_assigned_character() {
    let finder = fixture_finder();
    let info = finder.char_info(0x20AC);
    assert_eq!(info.code, "U+20AC");
    assert_eq!(info.character, "€");
    assert_eq!(info.description.as_deref(), Some("EURO SIGN"));
    assert_eq!(info.alias, None);
    assert_eq!(info.reserved_kind, None);
    assert_eq!(info.html_entity, "&#8364;");
    assert_eq!(info.named_entity.as_deref(), Some("&euro;"));
    assert_eq!(info.utf8_hex, "E2 82 AC");
    assert_eq!(info.utf16_hex, "20AC");
    let block = info.block.expect("currency block");
    assert_eq!(block.title, "Currency Symbols");
    assert_eq!(block.pdf_url, "http://www.unicode.org/charts/PDF/U20A0.pdf");
}

#[test]
fn char_info_for_reserved_and_unknown_codepoints() {
    let finder = fixture_finder();

    let info = finder.char_info(0xD800);
    assert_eq!(info.reserved_kind, Some(ReservedKind::Surrogate));
    assert_eq!(info.description.as_deref(), Some("Surrogate code point"));
    assert_eq!(info.character, "\u{FFFD}");
    assert_eq!(info.named_entity, None);

    let info = finder.char_info(0x20001);
    assert_eq!(info.reserved_kind, Some(ReservedKind::Templated));
    assert_eq!(info.description.as_deref(), Some("CJK UNIFIED IDEOGRAPH-20001"));
    assert_eq!(info.block.map(|b| b.start_dec), Some(0x20000));

    let info = finder.char_info(0x3000);
    assert_eq!(info.description, None);
    assert_eq!(info.reserved_kind, None);
    assert!(info.block.is_none());

    let info = finder.char_info(0x110000);
    assert_eq!(info.utf8_hex, "unknown");
    assert_eq!(info.utf16_hex, "unknown");
}

#[test]
fn examine_describes_the_last_character() {
    let finder = fixture_finder();

    let info = finder.examine("hello ©").expect("non-empty text");
    assert_eq!(info.code, "U+00A9");
    assert_eq!(info.description.as_deref(), Some("COPYRIGHT SIGN"));
    assert_eq!(info.html_entity, "&#169;");
    assert_eq!(info.named_entity.as_deref(), Some("&copy;"));
    assert_eq!(info.utf8_hex, "C2 A9");
    assert_eq!(info.block.map(|b| b.title.as_str()), Some("Latin-1 Supplement"));

    let info = finder.examine("cat 😸").expect("non-empty text");
    assert_eq!(info.codepoint, 0x1F638);
    assert_eq!(info.utf16_hex, "D83D DE38");
    assert_eq!(info.description, None);
    assert_eq!(info.block.map(|b| b.title.as_str()), Some("Emoticons"));

    assert!(finder.examine("").is_none());
}

#[test]
fn samples_follow_the_configured_list() {
    let finder = fixture_finder();
    let samples = finder.samples();
    assert_eq!(samples.len(), 9);
    assert_eq!(samples[0].code, "U+00A9");
    assert_eq!(samples[0].description.as_deref(), Some("COPYRIGHT SIGN"));
    assert_eq!(samples[8].code, "U+1D306");

    let options = FinderOptions { sample_chars: vec![0x2603], ..FinderOptions::default() };
    let finder = CharFinder::from_text(&fixture_text(), options).expect("fixture parses");
    let samples = finder.samples();
    assert_eq!(samples.len(), 1);
    assert_eq!(samples[0].description.as_deref(), Some("SNOWMAN"));
}

#[test]
fn decoding_honours_bom_and_encoding_labels() {
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(fixture_text().as_bytes());
    let finder = CharFinder::from_bytes(&bytes, FinderOptions::default()).expect("BOM is stripped");
    assert_eq!(finder.store().len(), 23);

    let latin1 = b"\tLATIN CAPITAL LETTER E WITH ACUTE \xC9\n";
    let options = FinderOptions::default().with_encoding("windows-1252");
    let finder = CharFinder::from_bytes(latin1, options).expect("windows-1252 data");
    let record = finder.store().record(0).expect("first character");
    assert!(record.description.ends_with('É'));

    let options = FinderOptions::default().with_encoding("no-such-encoding");
    let err = CharFinder::from_bytes(latin1, options).expect_err("unknown label");
    assert!(matches!(err, UcfError::UnknownEncoding(label) if label == "no-such-encoding"));
}

#[test]
fn load_state_tracks_the_lifecycle() {
    let mut state = LoadState::default();
    assert!(state.is_loading());
    assert!(matches!(state.finder(), Err(UcfError::NotLoaded)));

    state.complete(Ok(fixture_text().into_bytes()), FinderOptions::default());
    assert!(state.is_ready());
    let finder = state.finder().expect("ready");
    assert_eq!(finder.store().len(), 23);
}

#[test]
fn load_state_reports_failures() {
    let mut state = LoadState::default();
    let fetch_error = io::Error::new(io::ErrorKind::NotFound, "char-data.txt");
    state.complete(Err(fetch_error.into()), FinderOptions::default());
    assert!(state.is_failed());
    assert!(matches!(state.finder(), Err(UcfError::LoadFailed(_))));

    let mut state = LoadState::default();
    state.complete(Ok(b"?\tbad line\n".to_vec()), FinderOptions::default());
    assert!(state.is_failed());
    match state {
        LoadState::Failed(err) => {
            assert!(err.is_parse_error());
            assert!(matches!(err, UcfError::UnsupportedLineKind { line: 1, sigil: '?' }));
        }
        other => panic!("expected a failed load, got {:?}", other),
    }
}
