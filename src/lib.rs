//! Leadership Diagnosis - Leadership/followership self-assessment engine
//!
//! Scores a Likert questionnaire into one of eight leadership types and
//! matches a respondent's selected workplace concerns to a solution.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
