mod common;

use common::{create_test_generator, recount};
use lectio_core::{
    calculate_plan_statistics, export_file_name, export_plan_json, parse_plan_request,
    presets::{
        create_whole_bible_config, NewTestamentPlacement, PresetOptions, WholeBibleOptions,
        WisdomBooksPlacement,
    },
    BookTable, Plan, PlanRequest, Preset,
};
use tempfile::TempDir;

#[test]
fn test_sequential_request_reads_every_selected_chapter() {
    let generator = create_test_generator();
    let request = parse_plan_request(
        r#"{
            "planType": "sequential",
            "id": "mixed",
            "name": "Mixed selections",
            "booksToInclude": [
                {"bookCode": 1, "startChapter": 1, "endChapter": 11},
                {"bookCode": 19, "startChapter": 119, "endChapter": 119},
                {"bookCode": 45},
                {"bookCode": 66, "startChapter": 20}
            ],
            "chaptersPerDay": 5
        }"#,
    )
    .expect("Failed to parse request");

    let plan = generator.generate(&request).expect("Failed to generate plan");

    // 11 + 1 + 16 + 3 chapters
    assert_eq!(plan.total_readings(), 31);
    assert_eq!(plan.total_plan_days, 7);
    assert_eq!(plan.day(7).unwrap().len(), 1);
    assert_eq!(plan.book_reading_counts, recount(&plan));
    assert_eq!(plan.author.as_deref(), Some("Test Suite"));
}

#[test]
fn test_every_fixed_preset_fills_its_days() {
    let generator = create_test_generator();

    for preset in Preset::FIXED {
        let config = preset
            .config(generator.books(), &PresetOptions::default())
            .expect("Fixed presets need no options");
        let expected_days = config.total_plan_days;
        let per_day = config.streams.len();

        let plan = generator
            .generate(&PlanRequest::new(config))
            .unwrap_or_else(|e| panic!("{preset:?} failed: {e}"));

        assert_eq!(plan.total_plan_days, expected_days, "{preset:?}");
        assert!(
            plan.daily_readings.iter().all(|day| day.len() == per_day),
            "{preset:?} should read one chapter per stream per day"
        );
        assert_eq!(plan.book_reading_counts, recount(&plan), "{preset:?}");
    }
}

#[test]
fn test_whole_bible_in_a_year_wraps_around() {
    let generator = create_test_generator();
    let config = create_whole_bible_config(
        BookTable::canonical(),
        &WholeBibleOptions {
            new_testament_placement: NewTestamentPlacement::After,
            wisdom_books_placement: WisdomBooksPlacement::Within,
            included_wisdom_books: vec![],
            total_plan_days: 365,
        },
    )
    .expect("Failed to build preset");

    let plan = generator.generate(&PlanRequest::new(config)).unwrap();

    assert_eq!(plan.total_plan_days, 365);
    // 4 chapters a day covers all 1189 chapters and starts over
    assert_eq!(plan.total_readings(), 1460);
    assert_eq!(plan.reading_count(66), 22);
    assert_eq!(plan.reading_count(1), 100);
}

#[test]
fn test_whole_bible_statistics_with_wisdom_stream() {
    let generator = create_test_generator();
    let config = create_whole_bible_config(
        generator.books(),
        &WholeBibleOptions {
            new_testament_placement: NewTestamentPlacement::Alongside,
            wisdom_books_placement: WisdomBooksPlacement::Alongside,
            included_wisdom_books: vec!["Psalms".to_string(), "Proverbs".to_string()],
            total_plan_days: 365,
        },
    )
    .unwrap();

    let plan = generator.generate(&PlanRequest::new(config)).unwrap();
    let stats = calculate_plan_statistics(&plan, generator.books());

    // 748 OT chapters need 3 a day; NT and wisdom streams need 1 each
    assert_eq!(plan.total_readings(), 365 * 5);
    assert_eq!(stats.new_testament.readings, 365);
    assert_eq!(stats.new_testament.repetition, "1.4");
    // Job, Ecclesiastes and Song of Solomon stay in the OT stream
    let in_ot_stream: u32 = [18, 21, 22].iter().map(|&c| plan.reading_count(c)).sum();
    assert!(in_ot_stream > 0);
    assert_eq!(stats.wisdom_books.readings, 365 + in_ot_stream);
    assert_eq!(stats.book_readings["Psalms"], plan.reading_count(19));
}

#[test]
fn test_plan_json_uses_string_keys_for_counts() {
    let generator = create_test_generator();
    let request =
        parse_plan_request(r#"{"planType":"sequential","booksToInclude":[{"bookCode":40}]}"#)
            .unwrap();
    let plan = generator.generate(&request).unwrap();

    let value = serde_json::to_value(&plan).unwrap();
    assert_eq!(value["planType"], "precalculated_daily_json");
    assert_eq!(value["bookReadingCounts"]["40"], 28);
    assert_eq!(value["dailyReadings"][0][0]["bookCode"], 40);
    assert_eq!(value["planConfig"]["planType"], "sequential");

    let decoded: Plan = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, plan);
}

#[test]
fn test_exported_plan_reads_back_from_disk() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let generator = create_test_generator();
    let request = parse_plan_request(
        r#"{
            "planType": "chronological",
            "name": "Early Church",
            "chronologicalSequence": [
                {"bookCode": 44, "chapter": 1},
                {"bookCode": 44, "chapter": 2, "verses": "1-13"},
                {"bookCode": 59, "chapter": 1}
            ],
            "readingsPerDay": 2
        }"#,
    )
    .unwrap();
    let plan = generator.generate(&request).unwrap();

    let path = temp_dir.path().join(export_file_name(&plan));
    std::fs::write(&path, export_plan_json(&plan).unwrap()).expect("Failed to write export");

    assert!(path.ends_with("early-church.json"));
    let text = std::fs::read_to_string(&path).unwrap();
    let decoded: Plan = serde_json::from_str(&text).expect("Export should parse as a plan");
    assert_eq!(decoded.daily_readings, plan.daily_readings);
    assert_eq!(decoded.total_plan_days, 2);
    assert!(decoded.book_reading_counts.is_empty());
    assert_eq!(decoded.plan_config, Some(request.config));
}

#[test]
fn test_malformed_requests_are_client_errors() {
    for json in [
        r#"{"planType":"lectionary"}"#,
        r#"{"booksToInclude":[]}"#,
        r#"{"planType":"topical","topics":"faith"}"#,
        "not json",
    ] {
        let err = parse_plan_request(json).unwrap_err();
        assert!(err.is_client_error(), "{json}: {err}");
    }

    let generator = create_test_generator();
    let request = parse_plan_request(
        r#"{"planType":"sequential","booksToInclude":[{"bookCode":1}],"chaptersPerDay":0}"#,
    )
    .unwrap();
    assert!(generator.generate(&request).unwrap_err().is_client_error());
}
