use crate::classifier::{Classifier, ModelSummary};
use crate::domain::record::{feature_kind, FeatureKind, FeatureValue, InferenceRecord};
use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct ForestArtifact {
    pub name: String,
    #[serde(default)]
    pub version: String,
    pub trees: Vec<TreeArtifact>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TreeArtifact {
    pub nodes: Vec<Node>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Numeric {
        feature: String,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Categorical {
        feature: String,
        values: Vec<String>,
        left: usize,
        right: usize,
    },
    Leaf {
        class: i64,
    },
}

/// Majority-vote ensemble of decision trees read from a JSON artifact.
#[derive(Debug, Clone)]
pub struct TreeEnsemble {
    artifact: ForestArtifact,
}

impl TreeEnsemble {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading model artifact {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("loading model artifact {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let artifact: ForestArtifact = serde_json::from_str(raw).context("malformed model artifact")?;
        validate(&artifact)?;
        Ok(Self { artifact })
    }

    fn predict_row(&self, row: &InferenceRecord) -> Result<i64> {
        let mut votes: BTreeMap<i64, usize> = BTreeMap::new();
        for tree in &self.artifact.trees {
            *votes.entry(walk(tree, row)?).or_default() += 1;
        }

        // ascending order, so on a tie the smaller class wins
        let mut best: Option<(i64, usize)> = None;
        for (class, count) in votes {
            if best.map_or(true, |(_, c)| count > c) {
                best = Some((class, count));
            }
        }
        best.map(|(class, _)| class).ok_or_else(|| anyhow!("ensemble produced no votes"))
    }
}

impl Classifier for TreeEnsemble {
    fn summary(&self) -> ModelSummary {
        let features: BTreeSet<String> = self
            .artifact
            .trees
            .iter()
            .flat_map(|t| t.nodes.iter())
            .filter_map(|n| match n {
                Node::Numeric { feature, .. } | Node::Categorical { feature, .. } => Some(feature.clone()),
                Node::Leaf { .. } => None,
            })
            .collect();

        ModelSummary {
            kind: "tree_ensemble".to_string(),
            name: self.artifact.name.clone(),
            version: self.artifact.version.clone(),
            trees: self.artifact.trees.len(),
            features: features.into_iter().collect(),
        }
    }

    fn predict(&self, rows: &[InferenceRecord]) -> Result<Vec<i64>> {
        rows.iter().map(|row| self.predict_row(row)).collect()
    }
}

fn walk(tree: &TreeArtifact, row: &InferenceRecord) -> Result<i64> {
    let mut idx = 0;
    loop {
        let node = tree
            .nodes
            .get(idx)
            .ok_or_else(|| anyhow!("node {idx} out of range"))?;
        idx = match node {
            Node::Leaf { class } => return Ok(*class),
            Node::Numeric {
                feature,
                threshold,
                left,
                right,
            } => match row.feature(feature) {
                Some(FeatureValue::Numeric(v)) if v <= *threshold => *left,
                Some(FeatureValue::Numeric(_)) => *right,
                _ => bail!("feature {feature} is not numeric"),
            },
            Node::Categorical {
                feature,
                values,
                left,
                right,
            } => match row.feature(feature) {
                Some(FeatureValue::Categorical(v)) if values.iter().any(|x| x == v) => *left,
                Some(FeatureValue::Categorical(_)) => *right,
                _ => bail!("feature {feature} is not categorical"),
            },
        };
    }
}

fn validate(artifact: &ForestArtifact) -> Result<()> {
    if artifact.trees.is_empty() {
        bail!("model artifact has no trees");
    }

    for (t, tree) in artifact.trees.iter().enumerate() {
        if tree.nodes.is_empty() {
            bail!("tree {t} has no nodes");
        }
        let len = tree.nodes.len();
        for (i, node) in tree.nodes.iter().enumerate() {
            let (feature, expected, left, right) = match node {
                Node::Leaf { .. } => continue,
                Node::Numeric {
                    feature, left, right, ..
                } => (feature, FeatureKind::Numeric, *left, *right),
                Node::Categorical {
                    feature, left, right, ..
                } => (feature, FeatureKind::Categorical, *left, *right),
            };

            match feature_kind(feature) {
                None => bail!("tree {t} node {i}: unknown feature {feature}"),
                Some(kind) if kind != expected => {
                    bail!("tree {t} node {i}: feature {feature} used with the wrong split kind")
                }
                Some(_) => {}
            }

            // children must point forward so every walk ends at a leaf
            for child in [left, right] {
                if child <= i || child >= len {
                    bail!("tree {t} node {i}: invalid child index {child}");
                }
            }
        }
    }
    Ok(())
}
