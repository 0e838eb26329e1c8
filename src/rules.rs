//! Rule Registry - named predicates evaluated against the field scope.
//!
//! Every predicate is a pure function of (field, parameters, context) and
//! must never fail: input it cannot parse resolves to `false`. Unknown rule
//! names are kept as [`ConditionKind::Unknown`] and always evaluate false,
//! so a misconfigured rule degrades to "field always invalid" instead of
//! crashing the host.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use regex::Regex;
use std::sync::LazyLock;

use crate::fields::{ChoiceKind, Field, FieldValue, FormScope};
use crate::kanji;

/// Context for one validation pass: the field scope for sibling lookups and
/// a `now` snapshot taken at pass start, so `past` is stable within a pass
/// and injectable under test.
pub struct EvalContext<'a> {
    pub scope: &'a FormScope,
    pub now: DateTime<Utc>,
}

impl<'a> EvalContext<'a> {
    pub fn new(scope: &'a FormScope) -> Self {
        Self { scope, now: Utc::now() }
    }
}

/// Closed catalog of rule names. Parsing maps every known mini-language
/// name onto a variant; anything else lands in `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionKind {
    Required,
    RequiredNotrim,
    Equal,
    Len,
    Int,
    IntM,
    Hankaku,
    HankakuNospace,
    Zenkaku,
    Kana,
    Kana2,
    KanaHalf,
    Hira,
    Email,
    EmailRfc,
    Phone,
    PhoneNohyphen,
    Phone2,
    Year,
    Month,
    Day,
    Validymd,
    Past,
    Checked,
    Password1,
    PasswordUpper,
    PasswordLower,
    PasswordDigit,
    IncludesZenMark,
    ExcludesZenMark,
    IncludesZenHalfSpace,
    ExcludesZenHalfSpace,
    Joyokanji,
    Jinmekanji,
    Joyojinmekanji,
    /// Pre-processing normalization marker, not a pass/fail rule.
    Full2half,
    Unknown(String),
}

impl ConditionKind {
    pub fn from_name(name: &str) -> Self {
        use ConditionKind::*;
        match name {
            "required" => Required,
            "required_notrim" => RequiredNotrim,
            "equal" => Equal,
            "len" => Len,
            "int" => Int,
            "int_m" => IntM,
            "hankaku" => Hankaku,
            "hankaku_nospace" => HankakuNospace,
            "zenkaku" => Zenkaku,
            "kana" => Kana,
            "kana2" => Kana2,
            "kana_half" => KanaHalf,
            "hira" => Hira,
            "email" => Email,
            "email_rfc" => EmailRfc,
            "phone" => Phone,
            "phone_nohyphen" => PhoneNohyphen,
            "phone2" => Phone2,
            "year" => Year,
            "month" => Month,
            "day" => Day,
            "validymd" => Validymd,
            "past" => Past,
            "checked" => Checked,
            "password1" => Password1,
            "password_1" => PasswordUpper,
            "password_2" => PasswordLower,
            "password_3" => PasswordDigit,
            "includes_zen_mark" => IncludesZenMark,
            "excludes_zen_mark" => ExcludesZenMark,
            "includes_zen_half_space" => IncludesZenHalfSpace,
            "excludes_zen_half_space" => ExcludesZenHalfSpace,
            "joyokanji" => Joyokanji,
            "jinmekanji" => Jinmekanji,
            "joyojinmekanji" => Joyojinmekanji,
            "full2half" => Full2half,
            other => Unknown(other.to_string()),
        }
    }

    /// The mini-language name, also used to build condition-level error keys.
    pub fn name(&self) -> &str {
        use ConditionKind::*;
        match self {
            Required => "required",
            RequiredNotrim => "required_notrim",
            Equal => "equal",
            Len => "len",
            Int => "int",
            IntM => "int_m",
            Hankaku => "hankaku",
            HankakuNospace => "hankaku_nospace",
            Zenkaku => "zenkaku",
            Kana => "kana",
            Kana2 => "kana2",
            KanaHalf => "kana_half",
            Hira => "hira",
            Email => "email",
            EmailRfc => "email_rfc",
            Phone => "phone",
            PhoneNohyphen => "phone_nohyphen",
            Phone2 => "phone2",
            Year => "year",
            Month => "month",
            Day => "day",
            Validymd => "validymd",
            Past => "past",
            Checked => "checked",
            Password1 => "password1",
            PasswordUpper => "password_1",
            PasswordLower => "password_2",
            PasswordDigit => "password_3",
            IncludesZenMark => "includes_zen_mark",
            ExcludesZenMark => "excludes_zen_mark",
            IncludesZenHalfSpace => "includes_zen_half_space",
            ExcludesZenHalfSpace => "excludes_zen_half_space",
            Joyokanji => "joyokanji",
            Jinmekanji => "jinmekanji",
            Joyojinmekanji => "joyojinmekanji",
            Full2half => "full2half",
            Unknown(name) => name,
        }
    }

    pub fn known_names() -> &'static [&'static str] {
        &[
            "required",
            "required_notrim",
            "equal",
            "len",
            "int",
            "int_m",
            "hankaku",
            "hankaku_nospace",
            "zenkaku",
            "kana",
            "kana2",
            "kana_half",
            "hira",
            "email",
            "email_rfc",
            "phone",
            "phone_nohyphen",
            "phone2",
            "year",
            "month",
            "day",
            "validymd",
            "past",
            "checked",
            "password1",
            "password_1",
            "password_2",
            "password_3",
            "includes_zen_mark",
            "excludes_zen_mark",
            "includes_zen_half_space",
            "excludes_zen_half_space",
            "joyokanji",
            "jinmekanji",
            "joyojinmekanji",
            "full2half",
        ]
    }

    /// Required variants run even when the field value is empty.
    pub fn is_required(&self) -> bool {
        matches!(self, ConditionKind::Required | ConditionKind::RequiredNotrim)
    }

    /// Group-capable: parameters name sibling fields to re-validate.
    pub fn is_group(&self) -> bool {
        matches!(self, ConditionKind::Past | ConditionKind::Validymd)
    }

    pub fn is_normalization(&self) -> bool {
        matches!(self, ConditionKind::Full2half)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, ConditionKind::Unknown(_))
    }
}

// \d in the source mini-language means ASCII digits, so the classes below
// spell out [0-9] rather than relying on Unicode-aware \d.
static INT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());
static INT_M_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-?[0-9]+$").unwrap());
static HANKAKU_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\x20-\x7e]*$").unwrap());
static HANKAKU_NOSPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\x21-\x7e]*$").unwrap());
static ZENKAKU_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^\x20-\x7e]*$").unwrap());
static KANA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ァ-ヶー\x{3000}]+$").unwrap());
static KANA2_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ァ-ヶー\x{3000} ]+$").unwrap());
static KANA_HALF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\x{FF61}-\x{FF9F}]+$").unwrap());
static HIRA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\p{Hiragana}+$").unwrap());
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static EMAIL_RFC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .unwrap()
});
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9-]{10,13}$").unwrap());
static PHONE_NOHYPHEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10,11}$").unwrap());
static PHONE2_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\-０-９ー]+$").unwrap());
static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{4}$").unwrap());
static MONTH_DAY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{1,2}$").unwrap());
// Full-width punctuation minus the tolerated marks ・ ＆ （ ）.
static ZEN_MARK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[\x{3000}-\x{3040}\x{FF00}-\x{FF05}\x{FF07}\x{FF0A}-\x{FF0F}\x{FF1A}-\x{FF20}\x{FF3B}-\x{FF40}\x{FF5B}-\x{FF5E}]",
    )
    .unwrap()
});
static ZEN_HALF_SPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \x{3000}]").unwrap());
static HAN_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\p{scx:Han}+").unwrap());

/// Evaluate one condition. Pure: mutates neither field nor scope.
pub fn evaluate(kind: &ConditionKind, field: &Field, params: &[String], ctx: &EvalContext) -> bool {
    use ConditionKind::*;
    let value = field.value.joined();
    match kind {
        Required => required(field, params, ctx, true),
        RequiredNotrim => required(field, params, ctx, false),
        Equal => equal(&value, params, ctx),
        Len => len(&value, params),
        Int => INT_RE.is_match(&value),
        IntM => INT_M_RE.is_match(&value),
        Hankaku => HANKAKU_RE.is_match(&value),
        HankakuNospace => HANKAKU_NOSPACE_RE.is_match(&value),
        Zenkaku => ZENKAKU_RE.is_match(&value),
        Kana => KANA_RE.is_match(&value),
        Kana2 => KANA2_RE.is_match(&value),
        KanaHalf => KANA_HALF_RE.is_match(&value),
        Hira => HIRA_RE.is_match(&value),
        Email => EMAIL_RE.is_match(&value),
        EmailRfc => EMAIL_RFC_RE.is_match(&value),
        Phone => PHONE_RE.is_match(&value),
        PhoneNohyphen => PHONE_NOHYPHEN_RE.is_match(&value),
        Phone2 => PHONE2_RE.is_match(&value),
        Year => year_ok(&value),
        Month => month_ok(&value),
        Day => day_ok(&value),
        Validymd => validymd(params, ctx).unwrap_or(false),
        Past => past(params, ctx),
        Checked => field.is_checked(),
        Password1 => {
            has_ascii_upper(&value) && has_ascii_lower(&value) && has_ascii_digit(&value)
        }
        PasswordUpper => has_ascii_upper(&value),
        PasswordLower => has_ascii_lower(&value),
        PasswordDigit => has_ascii_digit(&value),
        IncludesZenMark => ZEN_MARK_RE.is_match(&value),
        ExcludesZenMark => !ZEN_MARK_RE.is_match(&value),
        IncludesZenHalfSpace => ZEN_HALF_SPACE_RE.is_match(&value),
        ExcludesZenHalfSpace => !ZEN_HALF_SPACE_RE.is_match(&value),
        Joyokanji => kanji_only(&value, kanji::is_joyo),
        Jinmekanji => kanji_only(&value, kanji::is_jinmei),
        Joyojinmekanji => kanji_only(&value, kanji::is_joyo_or_jinmei),
        // Normalization happens on blur, before conditions run.
        Full2half => true,
        Unknown(_) => false,
    }
}

/// Full-width ASCII (！ .. ～) to its half-width counterpart.
pub fn full2half(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            '\u{FF01}'..='\u{FF5E}' => {
                char::from_u32(c as u32 - 0xFEE0).unwrap_or(c)
            }
            _ => c,
        })
        .collect()
}

fn required(field: &Field, params: &[String], ctx: &EvalContext, trim_reference: bool) -> bool {
    // notempty-<otherVid>: skip the required check entirely while the
    // referenced field's joined value is empty.
    if params.len() > 1 && params[0] == "notempty" {
        let other = ctx
            .scope
            .get(&params[1])
            .map(|f| f.value.joined())
            .unwrap_or_default();
        let other = if trim_reference { other.trim().to_string() } else { other };
        if other.is_empty() {
            return true;
        }
    }
    match (&field.kind, &field.value) {
        (ChoiceKind::Single, FieldValue::Choices(choices)) => {
            let selected: Vec<_> = choices.iter().filter(|c| c.selected).collect();
            selected.len() == 1 && !selected[0].value.is_empty()
        }
        (ChoiceKind::Multi, FieldValue::Choices(choices)) => {
            choices.iter().any(|c| c.selected && !c.value.is_empty())
        }
        _ => !field.value.joined().trim().is_empty(),
    }
}

fn equal(value: &str, params: &[String], ctx: &EvalContext) -> bool {
    let Some(other_vid) = params.first() else {
        return false;
    };
    match ctx.scope.get(other_vid) {
        Some(other) => value == other.value.joined(),
        None => false,
    }
}

fn len(value: &str, params: &[String]) -> bool {
    let count = value.chars().count();
    // A non-numeric bound is unconstrained (`len--10` has no minimum).
    let min = params.first().and_then(|p| p.parse::<usize>().ok());
    let max = params.get(1).and_then(|p| p.parse::<usize>().ok());
    if let Some(min) = min {
        if count < min {
            return false;
        }
    }
    if let Some(max) = max {
        if count > max {
            return false;
        }
    }
    true
}

fn year_ok(value: &str) -> bool {
    YEAR_RE.is_match(value) && value.parse::<i32>().is_ok_and(|v| v >= 1900)
}

fn month_ok(value: &str) -> bool {
    MONTH_DAY_RE.is_match(value) && value.parse::<u32>().is_ok_and(|v| (1..=12).contains(&v))
}

fn day_ok(value: &str) -> bool {
    MONTH_DAY_RE.is_match(value) && value.parse::<u32>().is_ok_and(|v| (1..=31).contains(&v))
}

/// The three referenced values as strings, or None when a field is missing.
fn date_parts(params: &[String], ctx: &EvalContext) -> Option<[String; 3]> {
    if params.len() < 3 {
        return None;
    }
    let year = ctx.scope.get(&params[0])?.value.joined();
    let month = ctx.scope.get(&params[1])?.value.joined();
    let day = ctx.scope.get(&params[2])?.value.joined();
    Some([year, month, day])
}

/// None = misconfigured (missing params or fields), which the caller treats
/// as failed. Some(true) while any part is still empty: typing in progress
/// is not an error.
fn validymd(params: &[String], ctx: &EvalContext) -> Option<bool> {
    let [year, month, day] = date_parts(params, ctx)?;
    if year.is_empty() || month.is_empty() || day.is_empty() {
        return Some(true);
    }
    if !year_ok(&year) || !month_ok(&month) || !day_ok(&day) {
        return Some(false);
    }
    let (Ok(y), Ok(m), Ok(d)) = (year.parse::<i32>(), month.parse::<u32>(), day.parse::<u32>())
    else {
        return Some(false);
    };
    Some(NaiveDate::from_ymd_opt(y, m, d).is_some())
}

fn past(params: &[String], ctx: &EvalContext) -> bool {
    match validymd(params, ctx) {
        None | Some(false) => return false,
        Some(true) => {}
    }
    let Some([year, month, day]) = date_parts(params, ctx) else {
        return false;
    };
    if year.is_empty() || month.is_empty() || day.is_empty() {
        return true;
    }
    let (Ok(y), Ok(m), Ok(d)) = (year.parse::<i32>(), month.parse::<u32>(), day.parse::<u32>())
    else {
        return false;
    };
    let Some(date) = NaiveDate::from_ymd_opt(y, m, d) else {
        return false;
    };
    // The composed date keeps the current time-of-day, so "today" is never
    // strictly past.
    let candidate = date.and_time(ctx.now.time()).and_utc();
    candidate < ctx.now - Duration::seconds(1)
}

fn has_ascii_upper(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_uppercase())
}

fn has_ascii_lower(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_lowercase())
}

fn has_ascii_digit(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_digit())
}

/// Every Han-script run must be drawn entirely from the allow-list. Values
/// with no Han characters pass.
fn kanji_only(value: &str, allow: fn(char) -> bool) -> bool {
    HAN_RUN_RE
        .find_iter(value)
        .all(|run| run.as_str().chars().all(allow))
}
