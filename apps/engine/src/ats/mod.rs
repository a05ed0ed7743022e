// ATS helpers: closed-vocabulary keyword matching, skills top-up, and the
// presence-based completeness score. No network calls, no NLP.

pub mod keywords;
pub mod optimizer;
pub mod score;
