//! Outgoing prompt decoration and request context.

use fellah_common::{Crop, Language, Region};

/// Domain preamble sent with every request.
pub const AGRICULTURAL_CONTEXT: &str = "Moroccan Agricultural Context:
- Primary agricultural regions: Souss-Massa, Gharb, Doukkala
- Key crops: Wheat, barley, citrus, olives, tomatoes
- Challenges: Water scarcity, climate change, soil degradation
- Sustainable practices: Drip irrigation, crop rotation, organic farming
- Traditional crops: Argan, date palms, saffron
- Livestock: Sheep, goats, camels in pastoral regions";

/// Prefix `base_prompt` with the prefix for `language_tag`.
///
/// Unrecognized tags use the generic prefix; this never fails.
pub fn decorate(language_tag: &str, base_prompt: &str) -> String {
    format!("{}{base_prompt}", Language::from_tag(language_tag).prefix())
}

/// Where the farmer is and what they grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FarmProfile {
    pub region: Region,
    pub crop: Crop,
}

impl FarmProfile {
    pub fn new(region: Region, crop: Crop) -> Self {
        Self { region, crop }
    }

    /// Introduce the question with the farmer's region and crop.
    pub fn frame(&self, question: &str) -> String {
        format!(
            "أنا فلاح من منطقة {}, أزرع {}. {question}",
            self.region.label(),
            self.crop.label()
        )
    }
}

/// Preamble plus optional user-supplied material, passed through verbatim.
pub(crate) fn request_context(preamble: &str, extra: Option<&str>) -> String {
    let mut context = format!("{preamble}\n\n");
    if let Some(extra) = extra.filter(|e| !e.is_empty()) {
        context.push_str("User-provided context: ");
        context.push_str(extra);
        context.push_str("\n\n");
    }
    context
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decorate_local_dialect() {
        assert_eq!(decorate("local_dialect", "x"), "Shkun 3awn l-fellah: x");
        assert_eq!(
            decorate("local_dialect", "hello"),
            "Shkun 3awn l-fellah: hello"
        );
    }

    #[test]
    fn decorate_each_recognized_tag() {
        assert_eq!(decorate("french", "x"), "Aide agricole au Maroc : x");
        assert_eq!(decorate("arabic", "x"), "مساعد زراعي: x");
        assert_eq!(decorate("english", "x"), "Moroccan Agricultural Advisor: x");
    }

    #[test]
    fn decorate_unknown_tag_uses_default_prefix() {
        assert_eq!(decorate("spanish", "x"), "Agricultural Advice: x");
        assert_eq!(decorate("", ""), "Agricultural Advice: ");
    }

    #[test]
    fn frame_uses_arabic_labels() {
        let profile = FarmProfile::new(Region::SoussMassa, Crop::Tomatoes);
        assert_eq!(
            profile.frame("How much water?"),
            "أنا فلاح من منطقة سوس ماسة, أزرع الطماطم. How much water?"
        );
    }

    #[test]
    fn request_context_without_extra() {
        let context = request_context("PREAMBLE", None);
        assert_eq!(context, "PREAMBLE\n\n");
        assert_eq!(request_context("PREAMBLE", Some("")), "PREAMBLE\n\n");
    }

    #[test]
    fn request_context_passes_extra_verbatim() {
        let extra = "date,rain_mm\n2024-01-01,  3.5 \n";
        let context = request_context(AGRICULTURAL_CONTEXT, Some(extra));
        assert!(context.starts_with("Moroccan Agricultural Context:"));
        assert!(context.contains(&format!("User-provided context: {extra}\n\n")));
    }
}
