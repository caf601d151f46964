//! Built-in dataset: the N5 kanji modules and the kana syllabary charts.

pub(super) struct RawKanji {
    pub glyph: char,
    pub on: &'static str,
    pub kun: Option<&'static str>,
    pub gloss: &'static str,
    pub mnemonic: &'static str,
}

impl RawKanji {
    const fn new(
        glyph: char,
        on: &'static str,
        kun: Option<&'static str>,
        gloss: &'static str,
        mnemonic: &'static str,
    ) -> Self {
        Self {
            glyph,
            on,
            kun,
            gloss,
            mnemonic,
        }
    }
}

pub(super) struct RawModule {
    pub id: u32,
    pub title: &'static str,
    pub kanji: &'static [RawKanji],
}

pub(super) struct RawGuide {
    pub title: &'static str,
    pub entries: &'static [(char, &'static str)],
}

#[rustfmt::skip]
const NATURE_PEOPLE: &[RawKanji] = &[
    RawKanji::new('日', "にち", Some("ひ"), "Day / Sun", "The sun radical. Represents the sun or a day."),
    RawKanji::new('木', "もく", Some("き"), "Tree", "Looks like a tree with branches and roots."),
    RawKanji::new('人', "じん", Some("ひと"), "Person", "A person walking, viewed from the side."),
    RawKanji::new('水', "すい", Some("みず"), "Water", "Ripples of water flowing in a stream."),
    RawKanji::new('火', "か", Some("ひ"), "Fire", "Flames reaching upwards."),
    RawKanji::new('山', "さん", Some("やま"), "Mountain", "Three peaks of a mountain range."),
    RawKanji::new('川', "せん", Some("かわ"), "River", "Lines representing the flow of a river."),
    RawKanji::new('田', "でん", Some("た"), "Rice Field", "A field divided into four sections for irrigation."),
    RawKanji::new('口', "こう", Some("くち"), "Mouth", "An open mouth."),
    RawKanji::new('目', "もく", Some("め"), "Eye", "An eye with the pupil in the center."),
];

#[rustfmt::skip]
const NUMBERS_1_10: &[RawKanji] = &[
    RawKanji::new('一', "いち", Some("ひと"), "One", "One horizontal line."),
    RawKanji::new('二', "に", Some("ふた"), "Two", "Two horizontal lines."),
    RawKanji::new('三', "さん", Some("み"), "Three", "Three horizontal lines."),
    RawKanji::new('四', "し", Some("よん"), "Four", "A box with legs inside."),
    RawKanji::new('五', "ご", Some("いつ"), "Five", "Number 5."),
    RawKanji::new('六', "ろく", Some("む"), "Six", "A lid over legs."),
    RawKanji::new('七', "しち", Some("なな"), "Seven", "Number 7, looks like an upside down 7 with a slash."),
    RawKanji::new('八', "はち", Some("や"), "Eight", "Two lines parting ways."),
    RawKanji::new('九', "きゅう", Some("ここの"), "Nine", "Number 9."),
    RawKanji::new('十', "じゅう", Some("とお"), "Ten", "A cross shape."),
];

#[rustfmt::skip]
const DIRECTIONS_CONCEPTS: &[RawKanji] = &[
    RawKanji::new('上', "じょう", Some("うえ"), "Up / Above", "A line indicating a position above the ground."),
    RawKanji::new('下', "か", Some("した"), "Down / Below", "A line indicating a position below the ground."),
    RawKanji::new('左', "さ", Some("ひだり"), "Left", "A hand holding a tool (work)."),
    RawKanji::new('右', "う", Some("みぎ"), "Right", "A hand holding a mouth (eating)."),
    RawKanji::new('中', "ちゅう", Some("なか"), "Middle / Inside", "A line cutting through the center of a rectangle."),
    RawKanji::new('大', "だい", Some("おお"), "Big", "A person stretching their arms out wide."),
    RawKanji::new('小', "しょう", Some("ちい"), "Small", "Something small or split."),
    RawKanji::new('本', "ほん", Some("もと"), "Book / Origin", "A tree with a mark at the root."),
    RawKanji::new('円', "えん", Some("まる"), "Yen / Circle", "A round object or currency."),
    RawKanji::new('年', "ねん", Some("とし"), "Year", "Harvest of rice."),
];

#[rustfmt::skip]
const TIME_SPACE: &[RawKanji] = &[
    RawKanji::new('時', "じ", Some("とき"), "Time / Hour", "Sun + Temple/Government office (standard)."),
    RawKanji::new('分', "ふん", Some("わ"), "Minute / Part", "To split/divide something with a knife."),
    RawKanji::new('半', "はん", Some("なか"), "Half", "Three lines divided down the middle."),
    RawKanji::new('今', "こん", Some("いま"), "Now", "A roof with a clock pendulum (conceptually)."),
    RawKanji::new('先', "せん", Some("さき"), "Before / Ahead", "A person moving ahead of others."),
    RawKanji::new('間', "かん", Some("あいだ"), "Interval / Between", "Sun shining through the gates."),
    RawKanji::new('午', "ご", Some("うま"), "Noon", "Derived from the pestle radical."),
    RawKanji::new('前', "ぜん", Some("まえ"), "Before / Front", "To cut hair/trim before a ceremony."),
    RawKanji::new('後', "ご", Some("あと"), "After / Behind", "Moving slowly on a road."),
    RawKanji::new('何', "か", Some("なに"), "What", "A person carrying a burden, asking 'what is it?'"),
];

#[rustfmt::skip]
const ACTIONS_ADJECTIVES: &[RawKanji] = &[
    RawKanji::new('行', "こう", Some("い"), "Go", "An intersection of roads."),
    RawKanji::new('来', "らい", Some("く"), "Come", "A wheat plant (ancient meaning related to coming)."),
    RawKanji::new('食', "しょく", Some("た"), "Eat", "A mouth under a roof collecting food."),
    RawKanji::new('飲', "いん", Some("の"), "Drink", "Food + Yawning (mouth open)."),
    RawKanji::new('見', "けん", Some("み"), "See", "An eye on top of legs."),
    RawKanji::new('聞', "ぶん", Some("き"), "Hear", "An ear inside a gate."),
    RawKanji::new('高', "こう", Some("たか"), "Tall / Expensive", "A tall tower or building."),
    RawKanji::new('安', "あん", Some("やす"), "Cheap / Safe", "A woman under a roof (peaceful)."),
    RawKanji::new('新', "しん", Some("あたら"), "New", "Standing up a tree with an axe (freshly cut)."),
    RawKanji::new('古', "こ", Some("ふる"), "Old", "Ten mouths (stories passed down generations)."),
];

#[rustfmt::skip]
const SCHOOL_STUDY: &[RawKanji] = &[
    RawKanji::new('学', "がく", Some("まな"), "Study / Learn", "A child under a roof studying."),
    RawKanji::new('校', "こう", None, "School", "Tree + Intercourse/Association (place to gather)."),
    RawKanji::new('生', "せい", Some("い"), "Life / Student", "A plant growing out of the ground."),
    RawKanji::new('文', "ぶん", Some("ふみ"), "Sentence / Writing", "A pattern or lines crossing."),
    RawKanji::new('字', "じ", Some("あざ"), "Character / Letter", "A child under a roof (learning characters)."),
    RawKanji::new('語', "ご", Some("かた"), "Language / Word", "Words (speech) + I/Myself (five mouths)."),
    RawKanji::new('読', "どく", Some("よ"), "Read", "Words + Sell (reading aloud)."),
    RawKanji::new('書', "しょ", Some("か"), "Write", "A hand holding a brush."),
    RawKanji::new('名', "めい", Some("な"), "Name", "Evening + Mouth (saying name in the dark)."),
    RawKanji::new('友', "ゆう", Some("とも"), "Friend", "Two hands helping each other."),
];

#[rustfmt::skip]
const TIME_NATURE: &[RawKanji] = &[
    RawKanji::new('月', "げつ", Some("つき"), "Moon / Month", "A crescent moon."),
    RawKanji::new('金', "きん", Some("かね"), "Gold / Money", "Metal/Gold buried in the earth."),
    RawKanji::new('土', "ど", Some("つち"), "Earth / Soil", "A sprout growing from the ground."),
    RawKanji::new('週', "しゅう", None, "Week", "Road + Circumference (cycle of days)."),
    RawKanji::new('毎', "まい", None, "Every", "Person + Mother (concept of frequency)."),
    RawKanji::new('夕', "せき", Some("ゆう"), "Evening", "A crescent moon (early evening)."),
    RawKanji::new('空', "くう", Some("そら"), "Sky / Empty", "Roof + Legs (space under roof)."),
    RawKanji::new('雨', "う", Some("あめ"), "Rain", "Water drops falling from a cloud."),
    RawKanji::new('天', "てん", Some("あま"), "Heaven", "A person with a line above (sky)."),
    RawKanji::new('気', "き", None, "Spirit / Air", "Steam rising from rice."),
];

#[rustfmt::skip]
const FAMILY_PEOPLE: &[RawKanji] = &[
    RawKanji::new('父', "ふ", Some("ちち"), "Father", "Hand holding a stone axe (authority)."),
    RawKanji::new('母', "ぼ", Some("はは"), "Mother", "Woman with breasts (nursing)."),
    RawKanji::new('子', "し", Some("こ"), "Child", "A baby with a large head."),
    RawKanji::new('男', "だん", Some("おとこ"), "Man", "Rice field + Power (working in fields)."),
    RawKanji::new('女', "じょ", Some("おんな"), "Woman", "A kneeling woman."),
    RawKanji::new('兄', "きょう", Some("あに"), "Older Brother", "Mouth + Legs (speaking for the family)."),
    RawKanji::new('弟', "だい", Some("おとうと"), "Younger Brother", "A stick wrapped with string (order)."),
    RawKanji::new('姉', "し", Some("あね"), "Older Sister", "Woman + Market (city)."),
    RawKanji::new('妹', "まい", Some("いもうと"), "Younger Sister", "Woman + Not yet (immature)."),
    RawKanji::new('自', "じ", Some("みずか"), "Self", "A nose (pointing to oneself)."),
];

#[rustfmt::skip]
const ADJECTIVES_COLORS: &[RawKanji] = &[
    RawKanji::new('白', "はく", Some("しろ"), "White", "A sun rising (white light)."),
    RawKanji::new('黒', "こく", Some("くろ"), "Black", "Soot from a fire."),
    RawKanji::new('赤', "せき", Some("あか"), "Red", "Big + Fire (raging fire)."),
    RawKanji::new('青', "せい", Some("あお"), "Blue", "Plant growing from a well (fresh color)."),
    RawKanji::new('多', "た", Some("おお"), "Many", "Two moons (many nights)."),
    RawKanji::new('少', "しょう", Some("すく"), "Few", "Small + Slash (whittled down)."),
    RawKanji::new('長', "ちょう", Some("なが"), "Long", "Hair growing long."),
    RawKanji::new('広', "こう", Some("ひろ"), "Wide", "A building on a cliff (spacious)."),
    RawKanji::new('早', "そう", Some("はや"), "Early", "Sun + Ten (morning time)."),
    RawKanji::new('近', "きん", Some("ちか"), "Near", "Road + Axe (cutting distance)."),
];

#[rustfmt::skip]
const VERBS_ACTIONS: &[RawKanji] = &[
    RawKanji::new('買', "ばい", Some("か"), "Buy", "Net + Shell (money)."),
    RawKanji::new('言', "げん", Some("い"), "Say", "Words coming from a mouth."),
    RawKanji::new('話', "わ", Some("はな"), "Speak", "Words + Tongue."),
    RawKanji::new('立', "りつ", Some("た"), "Stand", "A person standing on the ground."),
    RawKanji::new('休', "きゅう", Some("やす"), "Rest", "Person leaning on a tree."),
    RawKanji::new('会', "かい", Some("あ"), "Meet", "People gathering under a roof."),
    RawKanji::new('出', "しゅつ", Some("で"), "Exit", "A plant growing out of the ground."),
    RawKanji::new('入', "にゅう", Some("はい"), "Enter", "Roots entering the ground."),
    RawKanji::new('売', "ばい", Some("う"), "Sell", "Samurai + Legs (merchant)."),
    RawKanji::new('待', "たい", Some("ま"), "Wait", "Road + Temple (waiting at temple)."),
];

pub(super) const KANJI_MODULES: &[RawModule] = &[
    RawModule {
        id: 1,
        title: "N5 Basics: Nature & People",
        kanji: NATURE_PEOPLE,
    },
    RawModule {
        id: 2,
        title: "N5 Basics: Numbers 1-10",
        kanji: NUMBERS_1_10,
    },
    RawModule {
        id: 3,
        title: "N5 Basics: Directions & Concepts",
        kanji: DIRECTIONS_CONCEPTS,
    },
    RawModule {
        id: 4,
        title: "N5 Basics: Time & Space",
        kanji: TIME_SPACE,
    },
    RawModule {
        id: 5,
        title: "N5 Basics: Actions & Adjectives",
        kanji: ACTIONS_ADJECTIVES,
    },
    RawModule {
        id: 6,
        title: "N5 Basics: School & Study",
        kanji: SCHOOL_STUDY,
    },
    RawModule {
        id: 7,
        title: "N5 Basics: Time & Nature",
        kanji: TIME_NATURE,
    },
    RawModule {
        id: 8,
        title: "N5 Basics: Family & People",
        kanji: FAMILY_PEOPLE,
    },
    RawModule {
        id: 9,
        title: "N5 Basics: Adjectives & Colors",
        kanji: ADJECTIVES_COLORS,
    },
    RawModule {
        id: 10,
        title: "N5 Basics: Verbs & Actions",
        kanji: VERBS_ACTIONS,
    },
];

#[rustfmt::skip]
const HIRAGANA: &[(char, &str)] = &[
    ('あ', "a"), ('い', "i"), ('う', "u"), ('え', "e"), ('お', "o"),
    ('か', "ka"), ('き', "ki"), ('く', "ku"), ('け', "ke"), ('こ', "ko"),
    ('さ', "sa"), ('し', "shi"), ('す', "su"), ('せ', "se"), ('そ', "so"),
    ('た', "ta"), ('ち', "chi"), ('つ', "tsu"), ('て', "te"), ('と', "to"),
    ('な', "na"), ('に', "ni"), ('ぬ', "nu"), ('ね', "ne"), ('の', "no"),
    ('は', "ha"), ('ひ', "hi"), ('ふ', "fu"), ('へ', "he"), ('ほ', "ho"),
    ('ま', "ma"), ('み', "mi"), ('む', "mu"), ('め', "me"), ('も', "mo"),
    ('や', "ya"), ('ゆ', "yu"), ('よ', "yo"),
    ('ら', "ra"), ('り', "ri"), ('る', "ru"), ('れ', "re"), ('ろ', "ro"),
    ('わ', "wa"), ('を', "wo"), ('ん', "n"),
];

#[rustfmt::skip]
const KATAKANA: &[(char, &str)] = &[
    ('ア', "a"), ('イ', "i"), ('ウ', "u"), ('エ', "e"), ('オ', "o"),
    ('カ', "ka"), ('キ', "ki"), ('ク', "ku"), ('ケ', "ke"), ('コ', "ko"),
    ('サ', "sa"), ('シ', "shi"), ('ス', "su"), ('セ', "se"), ('ソ', "so"),
    ('タ', "ta"), ('チ', "chi"), ('ツ', "tsu"), ('テ', "te"), ('ト', "to"),
    ('ナ', "na"), ('ニ', "ni"), ('ヌ', "nu"), ('ネ', "ne"), ('ノ', "no"),
    ('ハ', "ha"), ('ヒ', "hi"), ('フ', "fu"), ('ヘ', "he"), ('ホ', "ho"),
    ('マ', "ma"), ('ミ', "mi"), ('ム', "mu"), ('メ', "me"), ('モ', "mo"),
    ('ヤ', "ya"), ('ユ', "yu"), ('ヨ', "yo"),
    ('ラ', "ra"), ('リ', "ri"), ('ル', "ru"), ('レ', "re"), ('ロ', "ro"),
    ('ワ', "wa"), ('ヲ', "wo"), ('ン', "n"),
];

pub(super) const GUIDES: &[RawGuide] = &[
    RawGuide {
        title: "Hiragana",
        entries: HIRAGANA,
    },
    RawGuide {
        title: "Katakana",
        entries: KATAKANA,
    },
];
