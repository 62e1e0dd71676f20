mod eligibility;
mod entering;
mod properties;
