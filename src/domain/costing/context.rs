//! Constellation Cost Context - everything the aggregator reads, derived
//! once from a mission request.

use super::design_grouper::DesignGrouper;
use super::{Diagnostic, Diagnostics, SpacecraftCostRecord};
use crate::domain::foundation::FiscalYear;
use crate::domain::mission::{
    GroundStation, LaunchSpec, LaunchVehicle, MissionDirector, MissionRequest,
};

/// Immutable costing inputs for one constellation.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstellationContext {
    designs: usize,
    planes: usize,
    design_life: f64,
    fiscal_year: FiscalYear,
    context_factor: f64,
    inflation_factor: f64,
    launch: LaunchSpec,
    launch_vehicle: Option<LaunchVehicle>,
    ground_stations: Vec<GroundStation>,
    spacecraft_costs: Vec<SpacecraftCostRecord>,
    diagnostics: Diagnostics,
}

impl ConstellationContext {
    /// Groups and costs every spacecraft, then resolves the programmatic
    /// context. Unknown names resolve to defaults and are reported.
    pub fn from_request(request: &MissionRequest) -> Self {
        let mut diagnostics = Diagnostics::new();
        let constellation = &request.constellation;
        let context = &request.context;

        let grouped = DesignGrouper::group(
            &constellation.spacecraft,
            constellation.design_life,
            &mut diagnostics,
        );

        let mission_director: Option<MissionDirector> =
            Self::resolve(&context.mission_director, &mut diagnostics, |name| {
                Diagnostic::UnknownMissionDirector { name }
            });
        let launch_vehicle: Option<LaunchVehicle> =
            Self::resolve(&context.launch.vehicle, &mut diagnostics, |name| {
                Diagnostic::UnknownLaunchVehicle { name }
            });

        let fiscal_year = context.fiscal_year;
        let ctx = Self {
            designs: grouped.designs,
            planes: grouped.planes,
            design_life: constellation.design_life,
            fiscal_year,
            context_factor: mission_director
                .map(|d| d.context_factor())
                .unwrap_or(MissionDirector::DEFAULT_CONTEXT_FACTOR),
            inflation_factor: fiscal_year.inflation_ratio(),
            launch: context.launch.clone(),
            launch_vehicle,
            ground_stations: context.ground_stations.clone(),
            spacecraft_costs: grouped.records,
            diagnostics,
        };

        tracing::info!(
            spacecraft = ctx.spacecraft_to_be_built(),
            designs = ctx.designs,
            planes = ctx.planes,
            ground_stations = ctx.ground_stations.len(),
            fiscal_year = %ctx.fiscal_year,
            inflation_factor = ctx.inflation_factor,
            "constellation context derived"
        );

        ctx
    }

    /// Parses a categorical name. An empty name means "not given" and is
    /// not reported.
    fn resolve<T: std::str::FromStr>(
        name: &str,
        diagnostics: &mut Diagnostics,
        report: impl FnOnce(String) -> Diagnostic,
    ) -> Option<T> {
        match name.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                if !name.is_empty() {
                    diagnostics.push(report(name.to_string()));
                }
                None
            }
        }
    }

    pub fn designs(&self) -> usize {
        self.designs
    }

    pub fn planes(&self) -> usize {
        self.planes
    }

    /// Months.
    pub fn design_life(&self) -> f64 {
        self.design_life
    }

    pub fn fiscal_year(&self) -> FiscalYear {
        self.fiscal_year
    }

    /// Mission director factor. Reported, not applied to any cost.
    pub fn context_factor(&self) -> f64 {
        self.context_factor
    }

    /// Ratio of context fiscal year dollars to FY2000 dollars.
    pub fn inflation_factor(&self) -> f64 {
        self.inflation_factor
    }

    /// One record per input spacecraft, in input order.
    pub fn spacecraft_costs(&self) -> &[SpacecraftCostRecord] {
        &self.spacecraft_costs
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn spacecraft_to_be_built(&self) -> usize {
        self.spacecraft_costs.len()
    }

    pub fn spacecraft_with_design(&self, design: usize) -> usize {
        self.spacecraft_costs.iter().filter(|r| r.design == design).count()
    }

    /// Index of the first spacecraft with the design; 0 when none has it.
    pub fn first_spacecraft_with_design(&self, design: usize) -> usize {
        self.spacecraft_costs
            .iter()
            .position(|r| r.design == design)
            .unwrap_or(0)
    }

    /// Launch cost for the request's vehicle, FY2000 k$: unit cost times
    /// launches purchased. Unknown vehicles cost nothing.
    pub fn estimate_launch_cost(&self) -> f64 {
        self.launch_vehicle
            .map(|v| v.unit_cost())
            .unwrap_or(0.0)
            * f64::from(self.launch.total_number)
    }
}
