//! Analysis prompt template

/// Build the analysis prompt wrapping the raw log content
#[must_use]
pub fn build_prompt(logs: &str) -> String {
    format!(
        r"You are an expert DevOps engineer and log analyst. Analyze the following application error log and provide a comprehensive summary.

Please structure your analysis as follows:

## 🔍 Executive Summary
Provide a brief overview of the main issues found.

## 🚨 Critical Issues
List the most severe problems that need immediate attention, including:
- Critical failures that prevent the application from starting
- Security-related issues
- Data loss risks

## ⚠️ Major Issues
Identify significant problems that impact functionality:
- Service failures and timeouts
- Database connection issues
- Authentication problems
- Payment processing failures

## 📊 Error Patterns & Statistics
Analyze patterns in the errors:
- Most frequent error types
- Time-based patterns
- Cascading failures
- Retry attempts and their success rates

## 🛠️ Recommended Actions
Provide specific, actionable recommendations:
- Immediate fixes required
- Configuration changes needed
- Infrastructure improvements
- Monitoring enhancements

## 💡 Root Cause Analysis
Identify the underlying causes of the issues and their relationships.

---

Application Log Data:
{logs}

Please provide detailed, actionable insights that would help a development team quickly understand and resolve these issues."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_the_log_content() {
        let prompt = build_prompt("[ERROR] payment failed");
        assert!(prompt.contains("[ERROR] payment failed"));
        assert!(prompt.contains("Executive Summary"));
        assert!(prompt.contains("Root Cause Analysis"));
    }

    #[test]
    fn prompt_keeps_logs_after_the_instructions() {
        let prompt = build_prompt("MARKER");
        let instructions_end = prompt.find("Application Log Data:").unwrap();
        let marker = prompt.find("MARKER").unwrap();
        assert!(marker > instructions_end);
    }
}
