//! Reading prompt assembly.
//!
//! Builds the natural-language prompt blocks the consuming product submits
//! to its chat-completion provider. Assembly stops at producing text: no
//! HTTP, no credentials, no retries live here.

use crate::error::ReportError;
use crate::record::ReadingProfile;

/// Prompt for a daily reading from the user's birth profile and the
/// current day's energy profile.
pub fn daily_prompt(user: &ReadingProfile, today: &ReadingProfile) -> Result<String, ReportError> {
    let user_json = serde_json::to_string(user)?;
    let today_json = serde_json::to_string(today)?;
    Ok(format!(
        "Create today's fortune reading guidance and analysis, using \"you\" language. \
         Make it personal and insightful. No questions or disclaimers. \
         Don't include Chinese characters.\n\
         Use natural markdown formatting for structure like headings, bold, and lists.\n\n\
         **User Profile:**\n{user_json}\n\n\
         **Daily Energy Profile:**\n{today_json}"
    ))
}

/// Prompt for a pair compatibility reading.
///
/// `purposes` names the relationship contexts the reading should address
/// (e.g. "romance", "business"); an empty list falls back to a general
/// reading.
pub fn pair_prompt(
    user: &ReadingProfile,
    partner: &ReadingProfile,
    purposes: &[String],
) -> Result<String, ReportError> {
    let user_json = serde_json::to_string(user)?;
    let partner_json = serde_json::to_string(partner)?;
    let purposes = if purposes.is_empty() {
        "a general relationship".to_string()
    } else {
        purposes.join(", ")
    };
    Ok(format!(
        "Analyze the compatibility and relationship dynamics between these two \
         individuals for the following purposes: {purposes}. Focus on their strengths \
         as a pair, potential challenges, and growth opportunities specific to these \
         relationship types. Use \"you\" language and flowing paragraphs. \
         No questions or disclaimers and no Chinese characters.\n\
         User Analysis: {user_json}\n\
         Partner Analysis: {partner_json}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sizhu_analysis::classify;
    use sizhu_chart::{ChartInput, CivilDateTime, compute_pillars};

    fn profile_for(year: i32, month: u32, day: u32) -> ReadingProfile {
        let dt = CivilDateTime::new(year, month, day, 8, 0).unwrap();
        let chart = compute_pillars(&ChartInput::new(dt)).unwrap();
        ReadingProfile::from(&classify(&chart))
    }

    #[test]
    fn daily_prompt_embeds_both_profiles() {
        let user = profile_for(1992, 8, 17);
        let today = profile_for(2024, 1, 1);
        let prompt = daily_prompt(&user, &today).unwrap();
        assert!(prompt.contains("**User Profile:**"));
        assert!(prompt.contains("**Daily Energy Profile:**"));
        assert!(prompt.contains("\"dominant\""));
        assert!(prompt.starts_with("Create today's fortune reading"));
    }

    #[test]
    fn pair_prompt_lists_purposes() {
        let a = profile_for(1992, 8, 17);
        let b = profile_for(1990, 3, 5);
        let prompt =
            pair_prompt(&a, &b, &["romance".to_string(), "business".to_string()]).unwrap();
        assert!(prompt.contains("purposes: romance, business"));
        assert!(prompt.contains("User Analysis:"));
        assert!(prompt.contains("Partner Analysis:"));
    }

    #[test]
    fn pair_prompt_defaults_purpose() {
        let a = profile_for(1992, 8, 17);
        let b = profile_for(1990, 3, 5);
        let prompt = pair_prompt(&a, &b, &[]).unwrap();
        assert!(prompt.contains("a general relationship"));
    }
}
