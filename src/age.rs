//! Age groups and the built-in daily message texts keyed by them.

/// Developmental age bucket selecting which built-in guidance text to show.
///
/// The set is closed; data files may still carry legacy string values, which
/// `from_key` rejects so callers can fall back to the raw string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeGroup {
    /// 8-12 months.
    M8To12,
    /// 12-15 months.
    M12To15,
    /// 15-18 months.
    M15To18,
    /// 18-24 months.
    M18To24,
    /// 24-36 months.
    M24To36,
}

impl AgeGroup {
    /// All groups, in display order.
    pub const ALL: [AgeGroup; 5] = [
        Self::M8To12,
        Self::M12To15,
        Self::M15To18,
        Self::M18To24,
        Self::M24To36,
    ];

    /// Parse a data-file key like `"8-12"`.
    pub fn from_key(s: &str) -> Option<Self> {
        match s.trim() {
            "8-12" => Some(Self::M8To12),
            "12-15" => Some(Self::M12To15),
            "15-18" => Some(Self::M15To18),
            "18-24" => Some(Self::M18To24),
            "24-36" => Some(Self::M24To36),
            _ => None,
        }
    }

    /// The key this group carries in data files.
    pub fn key(&self) -> &'static str {
        match self {
            Self::M8To12 => "8-12",
            Self::M12To15 => "12-15",
            Self::M15To18 => "15-18",
            Self::M18To24 => "18-24",
            Self::M24To36 => "24-36",
        }
    }

    /// Human-readable badge label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::M8To12 => "8-12 месяцев",
            Self::M12To15 => "12-15 месяцев",
            Self::M15To18 => "15-18 месяцев",
            Self::M18To24 => "18-24 месяца",
            Self::M24To36 => "2-3 года",
        }
    }

    /// The fixed daily message body sent to this group.
    pub fn message(&self) -> &'static str {
        match self {
            Self::M8To12 => MESSAGE_8_12,
            Self::M12To15 => {
                "🏠 Показывайте предметы и четко называйте: 'Дом', 'Мяч', 'Кот'. Ждите попытки повторить."
            }
            Self::M15To18 => "🙏 Учите простым просьбам: 'Дай мячик', 'Покажи носик', 'Где мама?'",
            Self::M18To24 => "💬 Стройте фразы из двух слов: 'Мама дай', 'Папа иди', 'Киса мяу'.",
            Self::M24To36 => "❓ Задавайте простые вопросы: 'Что это?', 'Какого цвета?', 'Где лежит?'",
        }
    }
}

/// Full daily complex for the youngest group. The other groups get one-line
/// prompts; this one keeps the multi-section body with blank lines between
/// sections.
const MESSAGE_8_12: &str = r#"🎯 Комплекс развития на сегодня:

🖼️ Сенсорика + речь: карточки с 6 животными (🐶 – «ав-ав», 🐱 – «мяу», 🐮 – «му-у», 🐑 – «бе-е», 🦆 – «кря-кря», 🐓 – «ко-ко-ко»).

🤸 Физическая активность: полоса препятствий из подушек, свернутых одеял и коробок – малыш ползёт и карабкается.

🗣️ Предречевое развитие: спрятать игрушку за спину и вдруг показать – «Кто там?».

😊 Эмоциональное развитие: грустная мимика – «Ой-ой, мишка упал» → оживляемся: «Ура, подняли!»

✋ Тактильное развитие: шуршащий пакет и мягкая тряпочка – «шур-шур», «мягко»."#;

#[cfg(test)]
mod tests {
    use super::*;

    // AgeGroup::from_key tests

    #[test]
    fn test_from_key_known_groups() {
        assert_eq!(AgeGroup::from_key("8-12"), Some(AgeGroup::M8To12));
        assert_eq!(AgeGroup::from_key("12-15"), Some(AgeGroup::M12To15));
        assert_eq!(AgeGroup::from_key("15-18"), Some(AgeGroup::M15To18));
        assert_eq!(AgeGroup::from_key("18-24"), Some(AgeGroup::M18To24));
        assert_eq!(AgeGroup::from_key("24-36"), Some(AgeGroup::M24To36));
    }

    #[test]
    fn test_from_key_unknown() {
        assert_eq!(AgeGroup::from_key("9-14"), None);
        assert_eq!(AgeGroup::from_key(""), None);
        assert_eq!(AgeGroup::from_key("8 - 12"), None);
        assert_eq!(AgeGroup::from_key("месяцев"), None);
    }

    #[test]
    fn test_from_key_with_whitespace() {
        assert_eq!(AgeGroup::from_key("  8-12  "), Some(AgeGroup::M8To12));
        assert_eq!(AgeGroup::from_key("\t24-36\t"), Some(AgeGroup::M24To36));
    }

    #[test]
    fn test_key_roundtrip() {
        // Every key() value parses back to the same group
        for group in AgeGroup::ALL {
            assert_eq!(AgeGroup::from_key(group.key()), Some(group));
        }
    }

    // Label tests

    #[test]
    fn test_labels() {
        assert_eq!(AgeGroup::M8To12.label(), "8-12 месяцев");
        assert_eq!(AgeGroup::M18To24.label(), "18-24 месяца");
        assert_eq!(AgeGroup::M24To36.label(), "2-3 года");
    }

    // Message tests

    #[test]
    fn test_messages_are_nonempty() {
        for group in AgeGroup::ALL {
            assert!(!group.message().is_empty());
        }
    }

    #[test]
    fn test_youngest_group_message_is_multiline() {
        let message = AgeGroup::M8To12.message();
        assert!(message.contains('\n'));
        assert!(message.starts_with("🎯 Комплекс развития на сегодня:"));
    }

    #[test]
    fn test_older_group_messages_are_single_line() {
        for group in [
            AgeGroup::M12To15,
            AgeGroup::M15To18,
            AgeGroup::M18To24,
            AgeGroup::M24To36,
        ] {
            assert!(!group.message().contains('\n'));
        }
    }
}
