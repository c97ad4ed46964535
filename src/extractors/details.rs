//! Character search page (`charsearch.php`): readings, ranks, related
//! characters, common words and encodings.

use super::{Document, Field, Rows};
use crate::error::ScraperError;
use crate::models::CharacterDetails;

pub const PATH: &str = "charsearch.php";
pub const PARAM: &str = "zi";

const MEANING_DEFINITION: Field = Field::text("meaning", "Definition");

const MANDARIN: Field = Field::text("pronunciation", "Mandarin");
const CANTONESE: Field = Field::text("pronunciation", "Cantonese");
const JAPANESE_KUN: Field = Field::text("pronunciation", "Japanese Kun");
const JAPANESE_ON: Field = Field::text("pronunciation", "Japanese On");
const KOREAN: Field = Field::text("pronunciation", "Korean");
const VIETNAMESE: Field = Field::text("pronunciation", "Vietnamese");

const RANK_SIMPLIFIED: Field = Field::text("charRank", "Simplified");
const RANK_EVERYDAY_USAGE: Field = Field::text("charRank", "常用字表");
const RANK_HSK3: Field = Field::text("charRank", "HSK v.3 Level");
const RANK_HSK3_WRITING: Field = Field::text("charRank", "HSK v.3 Writing Level");

const RELATED_KANGXI_RADICAL: Field = Field::text("relatedChars", "Kangxi Radical");
const RELATED_TRADITIONAL_SCRIPT: Field = Field::text("relatedChars", "Traditional Script");
const RELATED_SEMANTIC: Field = Field::text("relatedChars", "Semantic");
const RELATED_SPECIALIZED_SEMANTIC: Field = Field::text("relatedChars", "Specialized Semantic");

const COMMON_WORDS: Rows = Rows::with_header("table#commonWords tr");
const INPUT_METHODS: Rows = Rows::with_header("table#inputMethod tr");
const ENCODINGS: Rows = Rows::with_header("table#encoding tr");

pub fn parse(html: &str) -> Result<CharacterDetails, ScraperError> {
    let doc = Document::parse(html);

    Ok(CharacterDetails {
        meaning_definition: doc.text(&MEANING_DEFINITION)?,
        pronunciation_mandarin: doc.text(&MANDARIN)?,
        pronunciation_cantonese: doc.text(&CANTONESE)?,
        pronunciation_japanese_kun: doc.text(&JAPANESE_KUN)?,
        pronunciation_japanese_on: doc.text(&JAPANESE_ON)?,
        pronunciation_korean: doc.text(&KOREAN)?,
        pronunciation_vietnamese: doc.text(&VIETNAMESE)?,
        character_rank_simplified: doc.number(&RANK_SIMPLIFIED)?,
        character_rank_everyday_usage: doc.number(&RANK_EVERYDAY_USAGE)?,
        character_rank_hsk3: doc.number(&RANK_HSK3)?,
        character_rank_hsk3_writing: doc.number(&RANK_HSK3_WRITING)?,
        related_character_kangxi_radical: doc.text(&RELATED_KANGXI_RADICAL)?,
        related_character_traditional_script: doc.text(&RELATED_TRADITIONAL_SCRIPT)?,
        related_semantic: doc.text(&RELATED_SEMANTIC)?,
        related_specialized_semantic: doc.text(&RELATED_SPECIALIZED_SEMANTIC)?,
        common_words_with_character: doc.column(&COMMON_WORDS, 1)?,
        input_method_codes: doc.code_values(&INPUT_METHODS)?,
        computer_encoding: doc.code_values(&ENCODINGS)?,
    })
}
