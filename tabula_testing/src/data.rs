//! Shared word corpus for table tests.

/// Vocabulary of the Dead Parrot sketch, in a fixed order.
///
/// The list is deliberately not deduplicated: `stunned` and `sorry` appear twice, which
/// exercises duplicate handling in the tables, so 75 insertions store 73 distinct keys.
pub static PARROT_WORDS: &[&str] = &[
    "bloody",
    "beautiful",
    "bereft",
    "blue",
    "blues",
    "Bolton",
    "British",
    "British-Railways",
    "complaints",
    "ex-parrot",
    "Feeweeweewee",
    "Ipswitch",
    "Norwegian",
    "Notlob",
    "Polly",
    "Praline",
    "Rail",
    "remarkable",
    "stunned",
    "Sergeant-Major",
    "sorry",
    "bird",
    "blame",
    "boss",
    "boutique",
    "brain",
    "bucket",
    "cage",
    "counter",
    "curtain",
    "customer",
    "cuttle",
    "daisies",
    "definitely",
    "demised",
    "deposited",
    "discovered",
    "examining",
    "expired",
    "fake",
    "fish",
    "fjords",
    "flat",
    "floor",
    "found",
    "four",
    "fresh",
    "inquiry",
    "invisible",
    "irrelevant",
    "lovely",
    "metabolic",
    "mustache",
    "nuzzled",
    "o'clock",
    "palindrome",
    "parrot",
    "peek",
    "perch",
    "pet",
    "plumage",
    "plummet",
    "python",
    "register",
    "shuffled",
    "slug",
    "sorry",
    "spells",
    "squawk",
    "squire",
    "stiff",
    "stone",
    "stun",
    "stunned",
    "surgeon",
];
