//! `{{TOKEN}}` placeholder substitution

use crate::context::Context;

/// The nine placeholder values substituted into every template file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateTokens {
    pub app_id: String,
    pub app_display_name: String,
    pub app_description: String,
    pub app_summary: String,
    pub tracker_id: String,
    pub github_username: String,
    pub repo_name: String,
    pub contact_email: String,
    pub tool_description: String,
}

impl TemplateTokens {
    pub fn from_context(ctx: &Context) -> Self {
        Self {
            app_id: ctx.app_id.clone(),
            app_display_name: ctx.app_display_name.clone(),
            app_description: ctx.app_description.clone(),
            app_summary: ctx.app_summary.clone(),
            tracker_id: ctx.tracker_id.clone(),
            github_username: ctx.github_username.clone(),
            repo_name: ctx.repo_name.clone(),
            contact_email: ctx.contact_email.clone(),
            tool_description: ctx.tool_description.clone(),
        }
    }

    /// Literal placeholder and replacement for every token
    pub fn pairs(&self) -> [(&'static str, &str); 9] {
        [
            ("{{APP_ID}}", self.app_id.as_str()),
            ("{{APP_DISPLAY_NAME}}", self.app_display_name.as_str()),
            ("{{APP_DESCRIPTION}}", self.app_description.as_str()),
            ("{{APP_SUMMARY}}", self.app_summary.as_str()),
            ("{{TRACKER_ID}}", self.tracker_id.as_str()),
            ("{{GITHUB_USERNAME}}", self.github_username.as_str()),
            ("{{REPO_NAME}}", self.repo_name.as_str()),
            ("{{CONTACT_EMAIL}}", self.contact_email.as_str()),
            ("{{TOOL_DESCRIPTION}}", self.tool_description.as_str()),
        ]
    }

    /// Replace every occurrence of every known token. Unknown `{{...}}` is left alone.
    pub fn apply(&self, content: &str) -> String {
        self.pairs()
            .iter()
            .fold(content.to_string(), |text, (token, value)| {
                text.replace(token, value)
            })
    }
}
