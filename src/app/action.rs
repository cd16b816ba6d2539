/// Side effects requested by the handler, carried out by the event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    PlanTrip { name: String },
    Quit,
}
