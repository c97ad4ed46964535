//! Records produced by the YellowBridge lookups.
//!
//! Every field is always present. Text that could not be found is an empty
//! string, numbers that could not be parsed are `0` and missing tables give
//! empty lists.

use serde::{Deserialize, Serialize};

/// Stroke and radical information for a character or word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokeInfo {
    pub english_definition: String,
    pub simplified_script: String,
    pub traditional_script: String,
    pub part_of_speech: String,
    pub kangxi_radical: String,
    pub additional_strokes: u32,
    pub total_strokes: u32,
    /// Layout of the components, e.g. "left-to-right".
    pub structure: String,
}

/// How a single character was formed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Etymology {
    pub definition: String,
    pub formation_method: String,
    pub simplification_method: String,
}

/// A code/value pair from the input method and encoding tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeValue {
    pub code: String,
    pub value: String,
}

/// Dictionary details for a single character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDetails {
    pub meaning_definition: String,
    pub pronunciation_mandarin: String,
    pub pronunciation_cantonese: String,
    pub pronunciation_japanese_kun: String,
    pub pronunciation_japanese_on: String,
    pub pronunciation_korean: String,
    pub pronunciation_vietnamese: String,
    pub character_rank_simplified: u32,
    pub character_rank_everyday_usage: u32,
    pub character_rank_hsk3: u32,
    pub character_rank_hsk3_writing: u32,
    pub related_character_kangxi_radical: String,
    pub related_character_traditional_script: String,
    pub related_semantic: String,
    pub related_specialized_semantic: String,
    pub common_words_with_character: Vec<String>,
    pub input_method_codes: Vec<CodeValue>,
    pub computer_encoding: Vec<CodeValue>,
}

/// One example sentence in both languages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleSentence {
    pub english: String,
    pub chinese: String,
}

/// Example sentences using a word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordExamples {
    pub english_definition: String,
    pub simplified_script: String,
    pub traditional_script: String,
    pub part_of_speech: String,
    pub sample_sentences: Vec<SampleSentence>,
}

/// Meaning, readings and related words.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordMeaning {
    pub english_definition: String,
    pub simplified_script: String,
    pub traditional_script: String,
    pub pinyin: String,
    pub effective_pinyin: String,
    pub zhuyin: String,
    pub cantonese: String,
    pub part_of_speech: String,
    pub measure_word: String,
    pub proficiency_level: String,
    pub words_with_same_head_word: Vec<String>,
    pub words_with_same_tail_word: Vec<String>,
}

/// Everything known about a single character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterAggregate {
    pub word: String,
    pub stroke_info: StrokeInfo,
    pub etymology: Etymology,
    pub details: CharacterDetails,
    pub examples: WordExamples,
    pub meaning: WordMeaning,
}

/// Everything known about a word (possibly several characters).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordAggregate {
    pub word: String,
    pub stroke_info: StrokeInfo,
    pub examples: WordExamples,
    pub meaning: WordMeaning,
}

impl From<CharacterAggregate> for WordAggregate {
    fn from(aggregate: CharacterAggregate) -> Self {
        Self {
            word: aggregate.word,
            stroke_info: aggregate.stroke_info,
            examples: aggregate.examples,
            meaning: aggregate.meaning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_keys() {
        let json = serde_json::to_value(CharacterDetails::default()).unwrap();
        assert_eq!(json["characterRankSimplified"], 0);
        assert!(json["commonWordsWithCharacter"].as_array().unwrap().is_empty());
        assert!(json.get("pronunciationJapaneseKun").is_some());
    }

    #[test]
    fn test_word_aggregate_has_no_character_only_keys() {
        let json = serde_json::to_value(WordAggregate::default()).unwrap();
        let keys: Vec<&str> = json
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys.len(), 4);
        assert!(keys.contains(&"strokeInfo"));
        assert!(keys.contains(&"examples"));
        assert!(keys.contains(&"meaning"));
        assert!(!keys.contains(&"etymology"));
        assert!(!keys.contains(&"details"));
    }

    #[test]
    fn test_character_aggregate_narrows_to_word() {
        let aggregate = CharacterAggregate {
            word: "好".to_string(),
            ..Default::default()
        };
        let word: WordAggregate = aggregate.into();
        assert_eq!(word.word, "好");
    }
}
