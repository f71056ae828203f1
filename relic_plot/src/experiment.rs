use color_eyre::eyre;
use color_eyre::Report;
use std::fmt::Debug;
use std::hash::Hash;

/// A closed set of benchmark experiments reported together.
///
/// `ALL` fixes the order in which experiments appear in tables.
pub trait Experiment:
    Debug + Clone + Copy + PartialEq + Eq + PartialOrd + Ord + Hash + 'static
{
    const ALL: &'static [Self];

    /// Key used by the benchmark runner (file stem or JSON key).
    fn key(&self) -> &'static str;

    /// Name shown in tables.
    fn label(&self) -> &'static str;

    fn from_key(key: &str) -> Result<Self, Report> {
        Self::ALL
            .iter()
            .copied()
            .find(|experiment| experiment.key() == key)
            .ok_or_else(|| eyre::eyre!("unknown experiment: {}", key))
    }
}

/// Resolves the display name of a raw experiment key.
pub fn label<E: Experiment>(key: &str) -> Result<&'static str, Report> {
    E::from_key(key).map(|experiment| experiment.label())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClientExperiment {
    SetupNew,
    SetupExisting,
    SelectLimit1,
    SelectLimit10,
    SelectLimit100,
    SelectJoin,
    CreateReservation,
    UpdateReservation,
    DeleteReservation,
}

impl Experiment for ClientExperiment {
    const ALL: &'static [Self] = &[
        Self::SetupNew,
        Self::SetupExisting,
        Self::SelectLimit1,
        Self::SelectLimit10,
        Self::SelectLimit100,
        Self::SelectJoin,
        Self::CreateReservation,
        Self::UpdateReservation,
        Self::DeleteReservation,
    ];

    fn key(&self) -> &'static str {
        match self {
            Self::SetupNew => "setup relic new",
            Self::SetupExisting => "setup relic existing",
            Self::SelectLimit1 => "select limit 1",
            Self::SelectLimit10 => "select limit 10",
            Self::SelectLimit100 => "select limit 100",
            Self::SelectJoin => "select join",
            Self::CreateReservation => "create reservation",
            Self::UpdateReservation => "update reservation",
            Self::DeleteReservation => "delete reservation",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::SetupNew => "Initial load",
            Self::SetupExisting => "Subsequent load",
            Self::SelectLimit1 => "Select 1 rows",
            Self::SelectLimit10 => "Select 10 rows",
            Self::SelectLimit100 => "Select 100 rows",
            Self::SelectJoin => "Select 10 joined",
            Self::CreateReservation => "Create reservation",
            Self::UpdateReservation => "Update reservation",
            Self::DeleteReservation => "Delete reservation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ServerExperiment {
    InitialPull,
    Pull1,
    Pull10,
    Pull100,
    CreateReservation,
    UpdateReservation,
    DeleteReservation,
}

impl Experiment for ServerExperiment {
    const ALL: &'static [Self] = &[
        Self::InitialPull,
        Self::Pull1,
        Self::Pull10,
        Self::Pull100,
        Self::CreateReservation,
        Self::UpdateReservation,
        Self::DeleteReservation,
    ];

    fn key(&self) -> &'static str {
        match self {
            Self::InitialPull => "initial-pull",
            Self::Pull1 => "pull 1 change",
            Self::Pull10 => "pull 10 changes",
            Self::Pull100 => "pull 100 changes",
            Self::CreateReservation => "create reservation",
            Self::UpdateReservation => "update reservation",
            Self::DeleteReservation => "delete reservation",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::InitialPull => "Initial pull",
            Self::Pull1 => "Pull 1 change",
            Self::Pull10 => "Pull 10 changes",
            Self::Pull100 => "Pull 100 changes",
            Self::CreateReservation => "Create reservation",
            Self::UpdateReservation => "Update reservation",
            Self::DeleteReservation => "Delete reservation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RestExperiment {
    GetReservations,
    CreateReservation,
    UpdateReservation,
    DeleteReservation,
}

impl Experiment for RestExperiment {
    const ALL: &'static [Self] = &[
        Self::GetReservations,
        Self::CreateReservation,
        Self::UpdateReservation,
        Self::DeleteReservation,
    ];

    fn key(&self) -> &'static str {
        match self {
            Self::GetReservations => "reservations",
            Self::CreateReservation => "create reservation",
            Self::UpdateReservation => "update reservation",
            Self::DeleteReservation => "delete reservation",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::GetReservations => "Get reservations",
            Self::CreateReservation => "Create reservation",
            Self::UpdateReservation => "Update reservation",
            Self::DeleteReservation => "Delete reservation",
        }
    }
}
