//! Prompt template for substance classification.
//!
//! A single deterministic template: persona, the substance verbatim, a
//! strict JSON-only output mandate with the literal enum values, and the
//! fixed trigger reference list that grounds the model's reasoning.

/// Reference list of known G6PD trigger categories embedded in the prompt.
pub const KNOWN_TRIGGERS: &str = "fava beans, mothballs (naphthalene), certain antibiotics \
     (sulfonamides, nitrofurantoin), antimalarials (primaquine), aspirin in high doses, \
     vitamin C supplements in high doses, menthol, henna";

/// Render the classification prompt for a substance.
///
/// Pure function of `input`; no hidden state and no sanitization.
/// Injection-style input is the remote model's problem, not this
/// builder's — the only upstream guard is the empty-input check at the
/// request boundary.
#[must_use]
pub fn classification_prompt(input: &str) -> String {
    format!(
        r#"You are a G6PD deficiency safety expert. Analyze this food/medication for G6PD safety: "{input}"

Respond ONLY with valid JSON in this exact format (no markdown, no backticks):
{{
  "item": "name of the item",
  "safety": "safe" or "unsafe" or "caution",
  "reason": "brief explanation",
  "alternatives": ["alternative 1", "alternative 2"],
  "severity": "low" or "medium" or "high"
}}

Consider these G6PD triggers: {KNOWN_TRIGGERS}."#
    )
}
