//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# HealthBuddy Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
#
# The API key is never read from this file. Set GOOGLE_API_KEY in the
# environment (or a .env file), or paste it when prompted.

[assistant]
# name = "HealthBuddy"
# model = "gemini-2.5-flash"
# max_tokens = 4096            # 1-65536
# temperature = 0.7            # 0.0-2.0
# request_timeout_secs = 120   # 1-600
# system_prompt = "Kamu adalah HealthBuddy, ..."

[ui]
# title = "HealthBuddy - Asisten Kesehatanmu"
# input_placeholder = "Tanya tentang kesehatan, nutrisi, atau gaya hidup!"
# clear_label = "Hapus Riwayat"
# clear_command = "/clear"
# user_label = "User"
# assistant_label = "HealthBuddy"
# credential_label = "Google API Key"
# submit_label = "Submit"

[logging]
# level = "info"               # trace, debug, info, warn, error
"##
}
