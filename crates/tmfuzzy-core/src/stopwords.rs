//! Function words excluded from scoring

use std::collections::HashSet;

use ahash::RandomState;
use lazy_static::lazy_static;

use crate::Language;

const ENGLISH: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "arent", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "cant", "cannot", "could", "couldnt", "did", "didnt", "do", "does", "doesnt",
    "doing", "dont", "down", "during", "each", "few", "for", "from", "further", "had", "hadnt",
    "has", "hasnt", "have", "havent", "having", "he", "hed", "hell", "hes", "her", "here",
    "heres", "hers", "herself", "him", "himself", "his", "how", "hows", "i", "id", "ill", "im",
    "ive", "if", "in", "into", "is", "isnt", "it", "its", "itself", "lets", "me", "more", "most",
    "mustnt", "my", "myself", "no", "nor", "not", "of", "off", "on", "once", "only", "or",
    "other", "ought", "our", "ours", "this", "that", "there", "the", "those", "they", "we", "us",
    "them", "to", "who", "which", "what", "she", "shed", "shes", "since", "also", "however",
    "although", "left", "right", "up", "go", "you", "will", "let", "try",
];

const JAPANESE: &[&str] = &[
    "これ", "それ", "あれ", "この", "その", "あの", "ここ", "そこ", "あそこ", "こちら", "どこ",
    "だれ", "なに", "なん", "何", "私", "貴方", "貴方方", "我々", "私達", "あの人", "あのかた",
    "彼女", "彼", "だ", "です", "ある", "あります", "おります", "いる", "います", "は", "が",
    "の", "に", "へ", "を", "で", "から", "まで", "より", "も", "どの", "と", "し", "それで",
    "しかし", "でも", "また", "思う", "思います", "よね", "ね", "じゃ", "ない", "じゃない",
    "ありません", "いません", "いない", "な", "について", "ついて", "関", "後", "に対して",
    "対して", "すべて", "全て", "全部", "そして", "さらに", "そしたら", "それから", "できる",
    "できます", "できない", "できません", "だろう", "でしょう", "する", "した", "します",
    "しました", "彼ら", "彼たち", "僕たち", "俺たち", "俺達", "僕達", "我ら", "俺ら", "私たち",
    "お前", "いいえ", "いや", "上", "下", "右", "左", "中", "それぞれ", "別", "他", "自分",
    "って", "・", "行く", "行きます", "あなた", "ください", "下さい", "お願いします", "お願い",
];

type StopwordSet = HashSet<&'static str, RandomState>;

lazy_static! {
    static ref ENGLISH_SET: StopwordSet = ENGLISH.iter().copied().collect();
    static ref JAPANESE_SET: StopwordSet = JAPANESE.iter().copied().collect();
}

fn set_for(language: Language) -> &'static StopwordSet {
    match language {
        Language::English => &*ENGLISH_SET,
        Language::Japanese => &*JAPANESE_SET,
    }
}

/// Exact, case-sensitive membership test
pub fn is_stopword(token: &str, language: Language) -> bool {
    set_for(language).contains(token)
}

/// Remove every stopword occurrence, keeping the order of what remains
pub fn filter(tokens: &[String], language: Language) -> Vec<String> {
    let set = set_for(language);
    tokens
        .iter()
        .filter(|token| !set.contains(token.as_str()))
        .cloned()
        .collect()
}
