use once_cell::sync::Lazy;
use std::collections::{ HashMap, HashSet };

/// Word valences on a roughly [-4, 4] scale, in the spirit of the VADER
/// lexicon. Trimmed to vocabulary that actually shows up in chat traffic.
pub static LEXICON: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        // strongly positive
        ("love", 3.2),
        ("loved", 2.9),
        ("loves", 2.7),
        ("amazing", 2.8),
        ("awesome", 3.1),
        ("excellent", 2.7),
        ("fantastic", 2.6),
        ("wonderful", 2.7),
        ("perfect", 2.7),
        ("brilliant", 2.8),
        ("outstanding", 2.6),
        ("incredible", 2.4),
        ("delighted", 2.5),
        ("thrilled", 2.4),
        ("best", 3.2),
        ("adore", 2.9),
        // positive
        ("great", 3.1),
        ("good", 1.9),
        ("nice", 1.8),
        ("happy", 2.7),
        ("glad", 2.0),
        ("pleased", 1.9),
        ("helpful", 1.8),
        ("thanks", 1.9),
        ("thank", 1.5),
        ("grateful", 2.3),
        ("appreciate", 2.0),
        ("enjoy", 2.2),
        ("enjoyed", 2.3),
        ("like", 1.5),
        ("liked", 1.6),
        ("likes", 1.5),
        ("fun", 2.3),
        ("cool", 1.3),
        ("fine", 0.8),
        ("better", 1.9),
        ("impressive", 2.3),
        ("useful", 1.9),
        ("smooth", 1.3),
        ("easy", 1.5),
        ("works", 1.2),
        ("working", 0.9),
        ("fast", 1.1),
        ("friendly", 2.2),
        ("welcome", 2.0),
        ("yes", 1.1),
        ("win", 2.8),
        ("won", 2.7),
        ("success", 2.7),
        ("successful", 2.6),
        ("resolved", 1.6),
        ("solved", 1.7),
        ("relieved", 1.7),
        ("excited", 2.3),
        ("hope", 1.9),
        ("hopeful", 2.0),
        ("calm", 1.3),
        ("comfortable", 1.7),
        ("satisfied", 2.0),
        ("interesting", 1.7),
        ("kind", 2.4),
        ("sweet", 2.0),
        ("beautiful", 2.9),
        ("smart", 1.7),
        ("clever", 2.1),
        ("right", 1.0),
        ("correct", 1.6),
        ("clear", 1.2),
        ("improved", 1.9),
        ("improvement", 1.6),
        // strongly negative
        ("hate", -2.7),
        ("hated", -2.9),
        ("hates", -2.4),
        ("terrible", -2.1),
        ("horrible", -2.5),
        ("awful", -2.0),
        ("worst", -3.1),
        ("disgusting", -2.4),
        ("furious", -2.6),
        ("devastated", -2.6),
        ("miserable", -2.6),
        ("unbearable", -2.4),
        ("useless", -1.8),
        ("garbage", -2.1),
        ("trash", -1.9),
        // negative
        ("bad", -2.5),
        ("sad", -2.1),
        ("angry", -2.3),
        ("upset", -1.9),
        ("annoyed", -1.8),
        ("annoying", -1.9),
        ("frustrated", -2.1),
        ("frustrating", -2.2),
        ("disappointed", -2.1),
        ("disappointing", -2.2),
        ("confused", -1.3),
        ("confusing", -1.4),
        ("worried", -1.8),
        ("worry", -1.6),
        ("anxious", -1.9),
        ("afraid", -2.0),
        ("scared", -2.0),
        ("fear", -2.2),
        ("stress", -1.9),
        ("stressed", -2.0),
        ("stressful", -2.1),
        ("problem", -1.4),
        ("problems", -1.5),
        ("issue", -1.0),
        ("issues", -1.1),
        ("broken", -1.8),
        ("broke", -1.6),
        ("fail", -2.3),
        ("failed", -2.2),
        ("failure", -2.4),
        ("fails", -2.1),
        ("error", -1.6),
        ("errors", -1.7),
        ("bug", -1.3),
        ("buggy", -1.7),
        ("crash", -1.9),
        ("crashed", -1.9),
        ("slow", -1.2),
        ("wrong", -1.6),
        ("difficult", -1.3),
        ("hard", -0.4),
        ("impossible", -1.7),
        ("lost", -1.3),
        ("lose", -1.6),
        ("losing", -1.6),
        ("hurt", -2.0),
        ("hurts", -1.9),
        ("pain", -2.0),
        ("painful", -2.2),
        ("cry", -2.0),
        ("crying", -2.1),
        ("alone", -1.0),
        ("lonely", -2.0),
        ("tired", -1.4),
        ("exhausted", -1.8),
        ("depressed", -2.6),
        ("depressing", -2.3),
        ("hopeless", -2.5),
        ("helpless", -2.2),
        ("sorry", -0.3),
        ("unfortunately", -1.1),
        ("no", -1.2),
        ("stupid", -2.4),
        ("dumb", -2.1),
        ("ridiculous", -1.5),
        ("waste", -1.8),
        ("wasted", -1.9),
    ])
});

/// Tokens that flip the valence of a following lexicon word.
pub static NEGATORS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "not",
        "no",
        "never",
        "isn't",
        "wasn't",
        "aren't",
        "weren't",
        "don't",
        "doesn't",
        "didn't",
        "can't",
        "cannot",
        "couldn't",
        "won't",
        "wouldn't",
        "shouldn't",
        "ain't",
        "hardly",
        "barely",
        "neither",
        "nor",
        "without",
        "lacks",
        "lacking",
    ])
});

/// Degree modifiers. Positive increments intensify, negative ones dampen;
/// the increment is applied toward the sign of the scored word.
pub static BOOSTERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("very", 0.293),
        ("really", 0.293),
        ("extremely", 0.293),
        ("absolutely", 0.293),
        ("completely", 0.293),
        ("totally", 0.293),
        ("incredibly", 0.293),
        ("so", 0.293),
        ("super", 0.293),
        ("truly", 0.293),
        ("deeply", 0.293),
        ("quite", 0.146),
        ("pretty", 0.146),
        ("fairly", 0.146),
        ("somewhat", -0.293),
        ("slightly", -0.293),
        ("marginally", -0.293),
        ("kinda", -0.293),
        ("sorta", -0.293),
        ("almost", -0.293),
        ("occasionally", -0.146),
    ])
});
