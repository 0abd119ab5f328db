//! Reshape a flat ACF field bag into a nested [`Post`]

use super::post::{Block, Hero, Post, Section};
use super::raw::{FieldBag, RawRecord};
use crate::helpers::iso_date;

/// Number of repeating sections in the CMS schema
pub const SECTION_COUNT: usize = 4;

/// Number of blocks per section in the CMS schema
pub const BLOCKS_PER_SECTION: usize = 2;

const CATCH_COPY: &str = "catch-copy";
const PROJECT_TITLE: &str = "project_title";
const HERO_IMAGE: &str = "fv_image";
const JOB_CONTENT: &str = "handle";
const JOB_URL: &str = "url";

struct BlockKeys {
    title: &'static str,
    text: &'static str,
}

struct SectionKeys {
    title: &'static str,
    image: &'static str,
    blocks: [BlockKeys; BLOCKS_PER_SECTION],
}

macro_rules! section_keys {
    ($n:literal) => {
        SectionKeys {
            title: concat!("b_headline0", $n),
            image: concat!("image0", $n),
            blocks: [
                BlockKeys {
                    title: concat!("s_headline0", $n, "_01"),
                    text: concat!("txt0", $n, "_01"),
                },
                BlockKeys {
                    title: concat!("s_headline0", $n, "_02"),
                    text: concat!("txt0", $n, "_02"),
                },
            ],
        }
    };
}

/// Field names of sections 1 through 4
const SECTION_KEYS: [SectionKeys; SECTION_COUNT] = [
    section_keys!(1),
    section_keys!(2),
    section_keys!(3),
    section_keys!(4),
];

/// Build the display model for one CMS record.
///
/// Never fails: missing fields become absent, empty blocks and sections
/// are dropped, and an unparseable date becomes `Invalid Date`.
pub fn transform(record: &RawRecord) -> Post {
    let fields = &record.acf;

    let sections = SECTION_KEYS
        .iter()
        .enumerate()
        .filter_map(|(i, keys)| build_section(fields, i as u8 + 1, keys))
        .collect();

    Post {
        id: record.id,
        hero: Hero {
            title: fields.text(CATCH_COPY),
            client_name: fields.text(PROJECT_TITLE),
            date: iso_date(record.date.as_deref()),
            image: fields.text(HERO_IMAGE),
        },
        sections,
        job_content: fields.text(JOB_CONTENT),
        job_url: fields.text(JOB_URL),
    }
}

impl From<&RawRecord> for Post {
    fn from(record: &RawRecord) -> Self {
        transform(record)
    }
}

fn build_section(fields: &FieldBag, index: u8, keys: &SectionKeys) -> Option<Section> {
    let blocks = keys
        .blocks
        .iter()
        .map(|block| Block {
            title: fields.text(block.title),
            text: fields.text(block.text),
        })
        .filter(|block| !block.is_empty())
        .collect();

    let section = Section {
        index,
        title: fields.text(keys.title),
        blocks,
        image: fields.text(keys.image),
    };

    if section.is_empty() {
        None
    } else {
        Some(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn record(acf: Value) -> RawRecord {
        serde_json::from_value(json!({
            "id": 128,
            "date": "2024-03-15T09:00:00Z",
            "acf": acf,
        }))
        .unwrap()
    }

    fn full_acf() -> serde_json::Map<String, Value> {
        let mut acf = serde_json::Map::new();
        acf.insert("catch-copy".into(), json!("Brand renewal"));
        acf.insert("project_title".into(), json!("<b>Acme</b> Inc."));
        acf.insert("fv_image".into(), json!("https://cdn.example/fv.jpg"));
        acf.insert("handle".into(), json!("Direction<br>Design"));
        acf.insert("url".into(), json!("https://acme.example/"));
        for n in 1..=4 {
            acf.insert(format!("b_headline0{}", n), json!(format!("Section {}", n)));
            acf.insert(format!("image0{}", n), json!(format!("https://cdn.example/{}.jpg", n)));
            for m in 1..=2 {
                acf.insert(format!("s_headline0{}_0{}", n, m), json!(format!("Block {}-{}", n, m)));
                acf.insert(format!("txt0{}_0{}", n, m), json!(format!("<p>Text {}-{}</p>", n, m)));
            }
        }
        acf
    }

    #[test]
    fn test_section_keys_table() {
        assert_eq!(SECTION_KEYS[0].title, "b_headline01");
        assert_eq!(SECTION_KEYS[2].image, "image03");
        assert_eq!(SECTION_KEYS[3].blocks[1].title, "s_headline04_02");
        assert_eq!(SECTION_KEYS[1].blocks[0].text, "txt02_01");
    }

    #[test]
    fn test_fully_populated_record() {
        let post = transform(&record(Value::Object(full_acf())));

        assert_eq!(post.id, Some(128));
        assert_eq!(post.hero.title.as_deref(), Some("Brand renewal"));
        assert_eq!(post.hero.client_name.as_deref(), Some("<b>Acme</b> Inc."));
        assert_eq!(post.hero.image.as_deref(), Some("https://cdn.example/fv.jpg"));
        assert_eq!(post.job_content.as_deref(), Some("Direction<br>Design"));
        assert_eq!(post.job_url.as_deref(), Some("https://acme.example/"));

        let indices: Vec<u8> = post.sections.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4]);
        for section in &post.sections {
            assert_eq!(section.blocks.len(), 2);
            assert_eq!(
                section.title.as_deref(),
                Some(format!("Section {}", section.index).as_str())
            );
        }
        assert_eq!(
            post.sections[3].blocks[1].text.as_deref(),
            Some("<p>Text 4-2</p>")
        );
    }

    #[test]
    fn test_empty_section_leaves_gap() {
        let mut acf = full_acf();
        for key in [
            "b_headline03",
            "image03",
            "s_headline03_01",
            "txt03_01",
            "s_headline03_02",
            "txt03_02",
        ] {
            acf.insert(key.into(), json!(""));
        }

        let post = transform(&record(Value::Object(acf)));
        let indices: Vec<u8> = post.sections.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![1, 2, 4]);
    }

    #[test]
    fn test_block_with_title_only() {
        let post = transform(&record(json!({ "s_headline02_01": "Only a title" })));

        assert_eq!(post.sections.len(), 1);
        let section = &post.sections[0];
        assert_eq!(section.index, 2);
        assert_eq!(section.title, None);
        assert_eq!(section.image, None);
        assert_eq!(
            section.blocks,
            vec![Block {
                title: Some("Only a title".to_string()),
                text: None,
            }]
        );
    }

    #[test]
    fn test_second_block_kept_when_first_empty() {
        let post = transform(&record(json!({
            "s_headline01_01": "",
            "txt01_01": false,
            "txt01_02": "second",
        })));

        assert_eq!(post.sections[0].blocks.len(), 1);
        assert_eq!(post.sections[0].blocks[0].text.as_deref(), Some("second"));
    }

    #[test]
    fn test_image_only_section() {
        let post = transform(&record(json!({ "image04": "https://cdn.example/4.jpg" })));

        assert_eq!(post.sections.len(), 1);
        assert_eq!(post.sections[0].index, 4);
        assert!(post.sections[0].blocks.is_empty());
    }

    #[test]
    fn test_no_sections() {
        let post = transform(&record(json!({ "catch-copy": "Lonely" })));
        assert!(post.sections.is_empty());
    }

    #[test]
    fn test_fifth_section_ignored() {
        let post = transform(&record(json!({
            "b_headline05": "Too far",
            "txt05_01": "ignored",
            "txt01_03": "also ignored",
        })));
        assert!(post.sections.is_empty());
    }

    #[test]
    fn test_hero_date() {
        let post = transform(&record(json!({})));
        assert_eq!(post.hero.date, "2024-03-15");
    }

    #[test]
    fn test_invalid_date_passes_through_as_marker() {
        let raw: RawRecord = serde_json::from_value(json!({ "date": "not a date" })).unwrap();
        let post = transform(&raw);
        assert_eq!(post.hero.date, "Invalid Date");
        assert_eq!(post.id, None);
    }

    #[test]
    fn test_missing_fixed_fields_are_absent() {
        let post = transform(&RawRecord::default());
        assert_eq!(post.hero.title, None);
        assert_eq!(post.hero.client_name, None);
        assert_eq!(post.hero.image, None);
        assert_eq!(post.job_content, None);
        assert_eq!(post.job_url, None);
    }

    #[test]
    fn test_transform_is_pure() {
        let raw = record(Value::Object(full_acf()));
        assert_eq!(transform(&raw), transform(&raw));
        assert_eq!(Post::from(&raw), transform(&raw));
    }
}
