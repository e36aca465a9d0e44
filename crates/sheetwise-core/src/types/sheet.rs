// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Study sheet types: the structured content extracted from one document.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How likely a concept is to show up on a test.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum TestLikelihood {
    High,
    #[default]
    Medium,
    Low,
}

/// One atomic unit of knowledge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    pub id: String,
    pub term: String,
    pub explanation: String,
    pub test_likelihood: TestLikelihood,
    /// Ids of related concepts in the same sheet. May contain cycles.
    #[serde(default)]
    pub related_concept_ids: Vec<String>,
}

/// A memory aid attached to a single concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mnemonic {
    pub concept_id: String,
    pub aid: String,
    pub imagery: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equation {
    pub name: String,
    /// LaTeX source; rendering is left to the presentation layer.
    pub formula: String,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Law {
    pub name: String,
    pub statement: String,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualAid {
    pub title: String,
    pub description: String,
    /// Free-form kind hint from the model (e.g. "diagram", "table", "timeline").
    #[serde(default)]
    pub kind: String,
}

/// One day of the spaced-repetition plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDay {
    pub day: u32,
    pub focus: String,
    #[serde(default)]
    pub tasks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowNode {
    pub id: String,
    pub label: String,
    /// Successor node ids.
    #[serde(default)]
    pub next: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flowchart {
    pub nodes: Vec<FlowNode>,
}

/// A structured study-content bundle derived from one uploaded document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyData {
    /// Assigned locally when the service leaves it out.
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub concepts: Vec<Concept>,
    #[serde(default)]
    pub mnemonics: Vec<Mnemonic>,
    #[serde(default)]
    pub equations: Vec<Equation>,
    #[serde(default)]
    pub laws: Vec<Law>,
    #[serde(default)]
    pub visual_aids: Vec<VisualAid>,
    #[serde(default)]
    pub plan: Vec<PlanDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flowchart: Option<Flowchart>,
}

/// A reference inside a sheet that points at nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DanglingReference {
    Mnemonic { concept_id: String },
    Related { from: String, to: String },
    FlowEdge { from: String, to: String },
}

impl std::fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mnemonic { concept_id } => write!(f, "mnemonic -> {concept_id}"),
            Self::Related { from, to } => write!(f, "related {from} -> {to}"),
            Self::FlowEdge { from, to } => write!(f, "flowchart {from} -> {to}"),
        }
    }
}

impl StudyData {
    /// Looks up a concept by id.
    pub fn concept(&self, id: &str) -> Option<&Concept> {
        self.concepts.iter().find(|c| c.id == id)
    }

    /// Looks up a concept by id, falling back to a case-insensitive term match.
    pub fn find_concept(&self, reference: &str) -> Option<&Concept> {
        let reference = reference.trim();
        self.concept(reference).or_else(|| {
            self.concepts
                .iter()
                .find(|c| c.term.eq_ignore_ascii_case(reference))
        })
    }

    /// Returns the first mnemonic attached to the concept, if any.
    pub fn mnemonic_for(&self, concept_id: &str) -> Option<&Mnemonic> {
        self.mnemonics.iter().find(|m| m.concept_id == concept_id)
    }

    /// Related concepts that resolve within this sheet. Dangling ids are skipped.
    pub fn related(&self, concept_id: &str) -> Vec<&Concept> {
        self.concept(concept_id)
            .map(|c| {
                c.related_concept_ids
                    .iter()
                    .filter_map(|id| self.concept(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Concepts in sheet order, highest test likelihood first.
    pub fn concepts_by_likelihood(&self) -> Vec<&Concept> {
        let rank = |l: TestLikelihood| match l {
            TestLikelihood::High => 0,
            TestLikelihood::Medium => 1,
            TestLikelihood::Low => 2,
        };
        let mut concepts: Vec<&Concept> = self.concepts.iter().collect();
        concepts.sort_by_key(|c| rank(c.test_likelihood));
        concepts
    }

    /// Every mnemonic, related-concept and flowchart reference that does not resolve.
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let concept_ids: HashSet<&str> = self.concepts.iter().map(|c| c.id.as_str()).collect();
        let mut dangling = Vec::new();

        for m in &self.mnemonics {
            if !concept_ids.contains(m.concept_id.as_str()) {
                dangling.push(DanglingReference::Mnemonic {
                    concept_id: m.concept_id.clone(),
                });
            }
        }

        for c in &self.concepts {
            for to in &c.related_concept_ids {
                if !concept_ids.contains(to.as_str()) {
                    dangling.push(DanglingReference::Related {
                        from: c.id.clone(),
                        to: to.clone(),
                    });
                }
            }
        }

        if let Some(flowchart) = &self.flowchart {
            let node_ids: HashSet<&str> = flowchart.nodes.iter().map(|n| n.id.as_str()).collect();
            for node in &flowchart.nodes {
                for to in &node.next {
                    if !node_ids.contains(to.as_str()) {
                        dangling.push(DanglingReference::FlowEdge {
                            from: node.id.clone(),
                            to: to.clone(),
                        });
                    }
                }
            }
        }

        dangling
    }
}
