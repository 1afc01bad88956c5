//! Static word lists and emoji tables backing the scorers and the detector.
//!
//! Kept as `const` slices so the data lives in the binary; scorers copy the
//! entries they need into owned sets/maps at construction time and never
//! mutate them afterwards.

/// Positive Thai sentiment words, including common intensity boosters that
/// also carry positive weight on their own (e.g. "มาก").
pub const THAI_POSITIVE: &[&str] = &[
    // Basic positive words
    "ดี", "เยี่ยม", "ยอดเยี่ยม", "เลิศ", "ดีเยี่ยม", "สุดยอด", "เจ๋ง",
    "เก่ง", "เด็ด", "ปัง", "เก๋", "วิเศษ", "น่าทึ่ง", "โดดเด่น",
    // Emotional positive words
    "รัก", "ชอบ", "หลงรัก", "ประทับใจ", "ชื่นชม", "ชื่นใจ", "ดีใจ",
    "มีความสุข", "สุข", "สนุก", "เพลิดเพลิน", "สบายใจ", "อบอุ่น",
    // Beauty and aesthetics
    "สวย", "งาม", "น่ารัก", "เสน่ห์", "มีเสน่ห์", "น่าดู", "น่าชม",
    "น่าอิจฉา", "หรู", "หรูหรา", "สง่า", "สง่างาม", "ใส", "เปล่งปลั่ง",
    // Quality and value
    "คุณภาพ", "มีคุณภาพ", "ประสิทธิภาพ", "ได้ผล", "ใช้ได้", "คุ้ม",
    "คุ้มค่า", "ไม่แพง", "ราคาดี", "ประหยัด", "มาตรฐาน", "เหมาะสม",
    // Success and achievement
    "สำเร็จ", "ชนะ", "ได้", "บรรลุ", "สมปรารถนา", "เฮง", "โชคดี",
    "ถูกใจ", "ตรงใจ", "ลงตัว", "เหมาะ", "พอใจ", "ถูกต้อง",
    // Boosters that read positive on their own
    "มาก", "มากๆ", "สุด", "ที่สุด", "เหลือเกิน", "อย่างมาก", "แสน",
    "เป็นที่สุด", "ไม่มีใครเทียบ", "เกินคาด",
];

/// Negative Thai sentiment words.
pub const THAI_NEGATIVE: &[&str] = &[
    // Basic negative words
    "แย่", "เลว", "ห่วย", "เสีย", "พัง", "ไม่ดี", "ไม่เยี่ยม",
    "หดหู่", "เศร้า", "ผิดหวัง", "น่าเศร้า", "น่าสงสาร", "น่าเสียดาย",
    // Emotional negative words
    "เกลียด", "เบื่อ", "น่าเบื่อ", "โกรธ", "หงุดหงิด", "รำคาญ",
    "ฉุนเฉียว", "ว้าวุ่น", "วุ่นวาย", "กังวล", "เครียด",
    // Quality issues
    "ไม่มีคุณภาพ", "ไม่ใช้ได้", "เสียเงิน", "แพง", "ไม่คุ้ม",
    "ไม่คุ้มค่า", "เสียของ", "เสียเวลา",
    // Problems and failures
    "ผิด", "ผิดพลาด", "พลาด", "ล้มเหลว", "เสียหาย", "เสียใจ",
    "ไม่สำเร็จ", "ไม่ได้", "ไม่ถูก", "ปัญหา", "ยุ่งยาก", "ลำบาก",
    // Physical discomfort and decay
    "ป่วย", "ไม่สบาย", "เจ็บ", "ปวด", "เมื่อย", "เหนื่อย", "อ่อนเพลีย",
    "ตาย", "หาย", "เสื่อม", "เก่า", "ชำรุด", "ขาด", "หัก", "แตก",
    // Negative boosters
    "ไม่ไหว", "ทนไม่ไหว", "เกินไป",
];

/// Intensity modifiers and their multipliers. A modifier within two tokens
/// of a sentiment word scales that word's weight; multiple modifiers in the
/// window compose multiplicatively.
pub const THAI_INTENSITY: &[(&str, f64)] = &[
    // Amplifiers
    ("มาก", 1.5),
    ("มากๆ", 1.8),
    ("สุด", 2.0),
    ("ที่สุด", 2.2),
    ("เหลือเกิน", 1.8),
    ("อย่างมาก", 1.6),
    ("แสน", 1.7),
    ("เป็นที่สุด", 2.0),
    ("เกินคาด", 1.5),
    ("เกินไป", 1.4),
    ("ไม่ไหว", 1.4),
    ("ทนไม่ไหว", 1.7),
    // Diminishers
    ("นิดหน่อย", 0.5),
    ("เล็กน้อย", 0.6),
    ("ค่อนข้าง", 0.8),
    ("พอ", 0.7),
    ("ปานกลาง", 0.5),
];

/// Words that flip the sign of the compound score; an even count cancels out.
pub const THAI_NEGATION: &[&str] = &[
    "ไม่", "ไม่ใช่", "ไม่ได้", "ไม่มี", "ไม่เป็น", "ไม่ควร",
    "ไม่ต้อง", "ไม่จำเป็น", "หยุด", "เลิก", "ห้าม", "ไม่อยาก",
];

/// Positive phrase patterns matched against the raw text; each occurrence
/// adds a flat bonus independent of token-level matches.
pub const THAI_POSITIVE_PHRASES: &[&str] = &[
    "ดีมาก", "เยี่ยมมาก", "ชอบมาก", "รักมาก", "สวยมาก",
    "สุดยอด", "ยอดเยี่ยม", "ดีเยี่ยม", "เจ๋งมาก", "เด็ดมาก",
];

/// Negative phrase patterns matched against the raw text.
pub const THAI_NEGATIVE_PHRASES: &[&str] = &[
    "แย่มาก", "ห่วยมาก", "เลวมาก", "เกลียดมาก", "เบื่อมาก",
    "ไม่ดี", "ไม่ชอบ", "ไม่เยี่ยม", "ไม่ใช่", "ไม่ควร",
];

/// Emoji sentiment used by the Thai scorer. Multi-codepoint glyphs are
/// keyed by their base codepoint (the variation selector is dropped).
pub const THAI_EMOJI: &[(char, f64)] = &[
    ('😊', 0.5), ('😃', 0.6), ('😄', 0.7), ('😁', 0.6), ('😆', 0.5),
    ('😍', 0.8), ('🥰', 0.8), ('😘', 0.7), ('😗', 0.5), ('😙', 0.5),
    ('😚', 0.5), ('🤗', 0.6), ('🤩', 0.8), ('😎', 0.6), ('😋', 0.5),
    ('👍', 0.5), ('👏', 0.6), ('🎉', 0.7), ('✨', 0.5), ('💕', 0.8),
    ('❤', 0.9), ('💖', 0.8), ('💝', 0.7), ('🔥', 0.6), ('⭐', 0.5),
    ('😢', -0.6), ('😭', -0.8), ('😞', -0.5), ('😔', -0.4), ('😟', -0.4),
    ('😕', -0.3), ('🙁', -0.3), ('😣', -0.5), ('😖', -0.6), ('😫', -0.7),
    ('😩', -0.6), ('😤', -0.5), ('😠', -0.7), ('😡', -0.8), ('🤬', -0.9),
    ('👎', -0.5), ('💔', -0.8), ('😵', -0.6), ('👹', -0.7), ('💀', -0.8),
];

/// Extended emoji table used by the English enhancement layer.
pub const ENGLISH_EMOJI: &[(char, f64)] = &[
    ('😊', 0.5), ('😃', 0.6), ('😄', 0.7), ('😁', 0.6), ('😆', 0.5),
    ('😍', 0.8), ('🥰', 0.8), ('😘', 0.7), ('😗', 0.5), ('😙', 0.5),
    ('😚', 0.5), ('🤗', 0.6), ('🤩', 0.8), ('😎', 0.6), ('😋', 0.5),
    ('😌', 0.3), ('😉', 0.4), ('🙂', 0.3), ('👍', 0.5),
    ('👏', 0.6), ('🎉', 0.7), ('✨', 0.5), ('💕', 0.8), ('❤', 0.9),
    ('💖', 0.8), ('💝', 0.7), ('🔥', 0.6), ('⭐', 0.5), ('🌟', 0.6),
    ('😢', -0.6), ('😭', -0.8), ('😞', -0.5), ('😔', -0.4), ('😟', -0.4),
    ('😕', -0.3), ('🙁', -0.3), ('😣', -0.5), ('😖', -0.6), ('😫', -0.7),
    ('😩', -0.6), ('😤', -0.5), ('😠', -0.7), ('😡', -0.8), ('🤬', -0.9),
    ('😱', -0.6), ('😨', -0.5), ('😰', -0.6), ('😥', -0.4), ('😪', -0.3),
    ('🤮', -0.8), ('🤢', -0.7), ('😷', -0.3), ('🤒', -0.4), ('🤕', -0.5),
    ('👎', -0.5), ('💔', -0.8), ('😵', -0.6), ('👹', -0.7), ('💀', -0.8),
];

/// Curated common Thai words used by the language detector as a lexical cue.
pub const COMMON_THAI_WORDS: &[&str] = &[
    "และ", "หรือ", "แต่", "ใน", "บน", "ที่", "เพื่อ", "ของ", "กับ",
    "โดย", "เป็น", "คือ", "มี", "ได้", "ทำ", "จะ", "ไป", "มา", "นี้",
    "นั้น", "เหล่านี้", "เหล่านั้น", "ฉัน", "คุณ", "เขา", "เธอ", "มัน",
    "เรา", "พวกเขา", "ผม", "ดิฉัน", "ดี", "เลว", "ยอดเยี่ยม",
    "สวย", "รัก", "ชอบ", "เกลียด", "มีความสุข", "เศร้า", "ใหญ่", "เล็ก",
    "เด็ด",
];

/// Curated common English words used by the language detector.
pub const COMMON_ENGLISH_WORDS: &[&str] = &[
    "the", "and", "or", "but", "in", "on", "at", "to", "for", "of",
    "with", "by", "is", "are", "was", "were", "be", "been", "have",
    "has", "had", "do", "does", "did", "will", "would", "could",
    "should", "can", "may", "might", "this", "that", "these", "those",
    "a", "an", "i", "you", "he", "she", "it", "we", "they", "me",
    "him", "us", "them", "my", "your", "his", "her", "its",
    "our", "their", "good", "bad", "great", "nice", "love", "like",
    "hate", "happy", "sad", "beautiful", "ugly", "big", "small",
];
