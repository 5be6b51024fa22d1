//! Surah names and verse references.

/// Surah names, indexed by surah number minus one.
pub const SURAH_NAMES: [&str; 114] = [
    "الفاتحة", "البقرة", "آل عمران", "النساء", "المائدة", "الأنعام", "الأعراف", "الأنفال",
    "التوبة", "یونس", "ھود", "یوسف", "الرعد", "ابراھیم", "الحجر", "النحل",
    "الإسراء", "الکهف", "مریم", "طه", "الأنبیاء", "الحج", "المؤمنون", "النور",
    "الفرقان", "الشعراء", "النمل", "القصص", "العنكبوت", "الروم", "لقمان", "السجدة",
    "الأحزاب", "سبأ", "فاطر", "یٰس", "الصافات", "ص", "الزمر", "غافر",
    "فصلت", "الشورى", "الزخرف", "الدخان", "الجاثية", "الأحقاف", "محمد", "الفتح",
    "الحجرات", "ق", "الذاريات", "الطور", "النجم", "القمر", "الرحمن", "الواقعہ",
    "الحدید", "المجادلة", "الحشر", "الممتحنة", "الصف", "الجمعة", "المنافقون",
    "التغابن", "الطلاق", "التحريم", "الملك", "القلم", "الحاقة", "المعارج",
    "نوح", "الجن", "المزمل", "المدثر", "القيامة", "الإنسان", "المرسلات",
    "النبأ", "النازعات", "عبس", "التكوير", "الانفطار", "المطففين", "الانشقاق",
    "البروج", "الطارق", "الأعلى", "الغاشية", "الفجر", "البلد", "الشمس",
    "الليل", "الضحى", "الشرح", "التين", "العلق", "القدر", "البينة",
    "الزلزلة", "العاديات", "القارعة", "التكاثر", "العصر", "الهمزة",
    "الفيل", "قريش", "الماعون", "الكوثر", "الكافرون", "النصر",
    "اللهب", "الإخلاص", "الفلق", "الناس",
];

/// Returns the name of a surah (1-114).
#[must_use]
pub fn surah_name(surah: u16) -> Option<&'static str> {
    usize::from(surah)
        .checked_sub(1)
        .and_then(|i| SURAH_NAMES.get(i))
        .copied()
}

/// Formats a display reference such as `البقرة ، آیت 255`.
#[must_use]
pub fn reference(surah: u16, ayah: u16) -> String {
    surah_name(surah).map_or_else(
        || format!("Surah {surah} ، آیت {ayah}"),
        |name| format!("{name} ، آیت {ayah}"),
    )
}
