use crate::model::ProjectModel;
use crate::policy::EffectiveConfig;
use rvguard_types::Finding;

mod required_version;
mod utils;

#[cfg(test)]
mod tests;

pub fn run_all(model: &ProjectModel, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    required_version::run(model, cfg, out);
}
