// SPDX-License-Identifier: PMPL-1.0-or-later

//! Rubric files: expectation sets plus compiler settings

use crate::analysis::{analyze, evaluate_all, AnalysisOutcome, ExpectationResult, SourceParser};
use crate::ast::Expression;
use crate::expectation::{compile, CompilerConfig, Expectation};
use crate::inspector::Inspection;
use anyhow::{anyhow, Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json;
use serde_yaml;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rubric {
    #[serde(default)]
    pub config: CompilerConfig,
    #[serde(default)]
    pub expectations: Vec<Expectation>,
}

impl Rubric {
    pub fn new(expectations: Vec<Expectation>) -> Self {
        Self {
            config: CompilerConfig::default(),
            expectations,
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading rubric {}", path.display()))?;
        let rubric: Rubric = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing json rubric {}", path.display()))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml rubric {}", path.display()))?,
            _ => {
                return Err(anyhow!(
                    "unsupported rubric extension for {}",
                    path.display()
                ))
            }
        };
        debug!(
            "loaded {} expectations from {}",
            rubric.expectations.len(),
            path.display()
        );
        Ok(rubric)
    }

    /// Compiled inspections, one per expectation, in order
    pub fn compile(&self) -> Vec<Inspection> {
        self.expectations
            .iter()
            .map(|expectation| compile(expectation, &self.config))
            .collect()
    }

    pub fn evaluate(&self, tree: &Expression) -> Vec<ExpectationResult> {
        evaluate_all(tree, &self.expectations, &self.config)
    }

    pub fn analyze<P>(&self, parser: &P, source: &str) -> AnalysisOutcome
    where
        P: SourceParser + ?Sized,
    {
        analyze(parser, source, &self.expectations, &self.config)
    }
}
