//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Fellah Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# The API key is read from the environment (GROQ_API_KEY by default),
# optionally loaded from a .env file in the working directory.

version = 1

[assistant]
# model = "llama-3.1-70b-versatile"
# temperature = 0.7      # 0.0-1.0
# max_tokens = 256       # 1-8192
# base_url = "https://api.groq.com/openai/v1"
# api_key_env = "GROQ_API_KEY"

[conversation]
# max_context_tokens = 1000   # word budget for history sent per request
# language = "local_dialect"  # local_dialect, french, arabic, english

[farm]
# enabled = true
# region = "souss_massa"      # souss_massa, gharb, doukkala, chaouia_ouardigha, beni_ahsen, other
# crop = "cereals"            # cereals, olives, citrus, tomatoes, argan, dates, saffron

[localization]
# greeting = "📡 Marhaba, hada l-jawab dyalk:\n\n"
# suffix = ""
# Substitutions run in the order listed; omit to use the built-in vocabulary.
# [[localization.terms]]
# source = "water"
# target = "l-ma"

[logging]
# level = "INFO"              # TRACE, DEBUG, INFO, WARNING, ERROR
"##
}
