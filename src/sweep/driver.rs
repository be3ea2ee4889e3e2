use tracing::{debug, info};

use crate::aircraft::model::Aircraft;
use crate::aircraft::sizing::{ConvergenceSettings, SizingStatus};
use crate::constants::{
    RANGE_SAMPLE_COUNT, RANGE_START, RANGE_STEP, SCENARIO_BASE_COST, SCENARIO_COST_STEP,
    SCENARIO_COUNT,
};

/// Grid of fixed-cost scenarios against requested ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepSettings {
    pub scenario_costs: Vec<f64>,
    pub ranges: Vec<f64>, // km
    pub convergence: ConvergenceSettings,
}

impl SweepSettings {
    pub fn uniform(
        base_cost: f64,
        cost_step: f64,
        scenario_count: usize,
        range_start: f64,
        range_step: f64,
        range_count: usize,
    ) -> Self {
        Self {
            scenario_costs: (0..scenario_count)
                .map(|k| base_cost + cost_step * k as f64)
                .collect(),
            ranges: (0..range_count)
                .map(|i| range_start + range_step * i as f64)
                .collect(),
            convergence: ConvergenceSettings::default(),
        }
    }
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self::uniform(
            SCENARIO_BASE_COST,
            SCENARIO_COST_STEP,
            SCENARIO_COUNT,
            RANGE_START,
            RANGE_STEP,
            RANGE_SAMPLE_COUNT,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepSample {
    pub requested_range: f64, // km
    /// Kerosene leg actually sized for, what the tables report as range.
    pub range: f64, // km
    pub takeoff_weight: f64, // kg
    pub cost: f64,
    pub status: SizingStatus,
}

impl SweepSample {
    pub fn takeoff_weight_tonnes(&self) -> f64 {
        self.takeoff_weight / 1000.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioResult {
    pub extra_money: f64,
    pub samples: Vec<SweepSample>,
}

impl ScenarioResult {
    /// Cheapest sample, first one on ties. Non-finite costs never win.
    pub fn best_sample(&self) -> Option<&SweepSample> {
        self.samples
            .iter()
            .filter(|sample| sample.cost.is_finite())
            .fold(None, |best: Option<&SweepSample>, sample| match best {
                Some(current) if current.cost <= sample.cost => Some(current),
                _ => Some(sample),
            })
    }

    pub fn best_range(&self) -> Option<f64> {
        self.best_sample().map(|sample| sample.range)
    }

    pub fn converged_count(&self) -> usize {
        self.samples
            .iter()
            .filter(|sample| sample.status == SizingStatus::Converged)
            .count()
    }
}

/// One cost-vs-range line of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct CostCurve {
    pub name: String,
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SweepReport {
    pub scenarios: Vec<ScenarioResult>,
}

impl SweepReport {
    pub fn last_scenario(&self) -> Option<&ScenarioResult> {
        self.scenarios.last()
    }

    /// `(fixed cost, best range)`, one row per scenario. The range is NaN when no
    /// sample of the scenario has a finite cost.
    pub fn best_ranges(&self) -> Vec<(f64, f64)> {
        self.scenarios
            .iter()
            .map(|scenario| {
                (
                    scenario.extra_money,
                    scenario.best_range().unwrap_or(f64::NAN),
                )
            })
            .collect()
    }

    pub fn cost_curves(&self) -> Vec<CostCurve> {
        self.scenarios
            .iter()
            .map(|scenario| CostCurve {
                name: format!("fixed cost {:.0}", scenario.extra_money),
                points: scenario
                    .samples
                    .iter()
                    .map(|sample| [sample.range, sample.cost])
                    .collect(),
            })
            .collect()
    }
}

pub fn run_sweep(aircraft: &mut Aircraft, settings: &SweepSettings) -> SweepReport {
    run_sweep_with(aircraft, settings, |_| {})
}

/// Sweeps every scenario over every range on one aircraft instance.
///
/// The instance is carried from sample to sample: each sizing starts from the previous
/// converged takeoff weight. `on_scenario` fires once per finished scenario.
pub fn run_sweep_with<F>(
    aircraft: &mut Aircraft,
    settings: &SweepSettings,
    mut on_scenario: F,
) -> SweepReport
where
    F: FnMut(&ScenarioResult),
{
    let mut report = SweepReport::default();

    for &extra_money in &settings.scenario_costs {
        aircraft.extra_money = extra_money;
        let mut samples = Vec::with_capacity(settings.ranges.len());

        for &requested_range in &settings.ranges {
            aircraft.target_range = requested_range;
            let outcome = aircraft.update_weight(settings.convergence);
            debug!(
                extra_money,
                requested_range,
                range = aircraft.target_range,
                takeoff_weight = aircraft.takeoff_weight,
                cost = aircraft.cost,
                iterations = outcome.iterations,
                "sweep sample"
            );

            samples.push(SweepSample {
                requested_range,
                range: aircraft.target_range,
                takeoff_weight: aircraft.takeoff_weight,
                cost: aircraft.cost,
                status: outcome.status,
            });
        }

        let scenario = ScenarioResult {
            extra_money,
            samples,
        };
        info!(
            extra_money,
            best_range = ?scenario.best_range(),
            converged = scenario.converged_count(),
            samples = scenario.samples.len(),
            "scenario finished"
        );
        on_scenario(&scenario);
        report.scenarios.push(scenario);
    }

    report
}
