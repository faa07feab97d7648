use crate::core::session::MapSession;
use crate::core::{Antenna, Dimensions, HazardPosition, MapStore, Position, Result};
use crate::utils::error::ErrorSeverity;
use serde::{Deserialize, Serialize};

/// Mutations to apply after the map is loaded: insertions first, then removals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationPlan {
    pub insertions: Vec<Antenna>,
    pub removals: Vec<Position>,
}

impl MutationPlan {
    pub fn is_empty(&self) -> bool {
        self.insertions.is_empty() && self.removals.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MutationOutcome {
    Inserted { antenna: Antenna },
    Rejected { antenna: Antenna, reason: String },
    Removed { antenna: Antenna },
    NotFound { position: Position },
}

#[derive(Debug, Clone, Serialize)]
pub struct MapReport {
    pub map: String,
    pub dimensions: Dimensions,
    pub loaded: Vec<Antenna>,
    pub mutations: Vec<MutationOutcome>,
    pub remaining: Vec<Antenna>,
    /// Distinct frequencies among the remaining antennas.
    pub frequencies: Vec<char>,
    pub hazards: Vec<HazardPosition>,
}

pub struct MapEngine<S: MapStore> {
    store: S,
}

impl<S: MapStore> MapEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load, apply the plan, then detect hazards on what remains.
    ///
    /// Rejected insertions are recorded in the report; every other failure
    /// aborts the run.
    pub fn run(self, plan: &MutationPlan) -> Result<MapReport> {
        tracing::info!("Opening map {}", self.store.location());
        let mut session = MapSession::open(self.store)?;
        session.registry().ensure_not_empty()?;

        let loaded: Vec<Antenna> = session.registry().iter().cloned().collect();
        let mut mutations = Vec::with_capacity(plan.insertions.len() + plan.removals.len());

        for antenna in &plan.insertions {
            match session.insert_antenna(antenna.frequency, antenna.position) {
                Ok(inserted) => mutations.push(MutationOutcome::Inserted { antenna: inserted }),
                Err(e) if e.severity() == ErrorSeverity::Low => {
                    tracing::warn!("Insert rejected: {}", e);
                    mutations.push(MutationOutcome::Rejected {
                        antenna: antenna.clone(),
                        reason: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        for &position in &plan.removals {
            let outcome = match session.remove_antenna(position)? {
                Some(antenna) => MutationOutcome::Removed { antenna },
                None => MutationOutcome::NotFound { position },
            };
            mutations.push(outcome);
        }

        let hazards = session.hazards()?;
        tracing::info!(
            "{} antennas remaining, {} hazard positions",
            session.registry().len(),
            hazards.len()
        );

        Ok(MapReport {
            map: session.store().location(),
            dimensions: session.registry().dimensions(),
            loaded,
            mutations,
            remaining: session.registry().iter().cloned().collect(),
            frequencies: session.registry().frequencies(),
            hazards: hazards.iter().copied().collect(),
        })
    }
}
