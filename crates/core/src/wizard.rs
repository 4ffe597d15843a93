//! Booking creation wizard.
//!
//! A linear five-step flow that accumulates a student, a trainer, one of the
//! trainer's packages, a session schedule and a pickup location, then turns
//! them into a single [`NewBooking`] request. The wizard owns no I/O: callers
//! feed it fetched records and submit the built request themselves.

use thiserror::Error;

use crate::model::{
    Address, AddressId, NewBooking, PickupLocation, PickupMode, ScheduleError, SessionSchedule,
    Student, Trainer, TrainerPackage, TrainerUserId,
};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WizardError {
    #[error("select a student first")]
    MissingStudent,

    #[error("select a trainer first")]
    MissingTrainer,

    #[error("select a package first")]
    MissingPackage,

    #[error("address {0} does not belong to the selected student")]
    UnknownAddress(AddressId),

    #[error("the selected trainer has no default address")]
    NoTrainerAddress,

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

//
// ─── STEPS ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WizardStep {
    SelectStudent,
    SelectTrainer,
    SelectPackage,
    ScheduleSessions,
    SelectPickupLocation,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        WizardStep::SelectStudent,
        WizardStep::SelectTrainer,
        WizardStep::SelectPackage,
        WizardStep::ScheduleSessions,
        WizardStep::SelectPickupLocation,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            WizardStep::SelectStudent => 0,
            WizardStep::SelectTrainer => 1,
            WizardStep::SelectPackage => 2,
            WizardStep::ScheduleSessions => 3,
            WizardStep::SelectPickupLocation => 4,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            WizardStep::SelectStudent => "Select student",
            WizardStep::SelectTrainer => "Select trainer",
            WizardStep::SelectPackage => "Select package",
            WizardStep::ScheduleSessions => "Schedule sessions",
            WizardStep::SelectPickupLocation => "Pickup location",
        }
    }

    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    #[must_use]
    pub fn prev(self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    #[must_use]
    pub fn is_last(self) -> bool {
        self == WizardStep::SelectPickupLocation
    }
}

//
// ─── WIZARD ────────────────────────────────────────────────────────────────────
//

/// Local state of one booking being assembled.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingWizard {
    step: WizardStep,
    student: Option<Student>,
    trainer: Option<Trainer>,
    package: Option<TrainerPackage>,
    /// Size of the last package list fetched for the current trainer.
    package_count: Option<usize>,
    sessions: SessionSchedule,
    pickup_mode: PickupMode,
    pickup_addresses: Option<Vec<Address>>,
    pickup: Option<PickupLocation>,
}

impl Default for BookingWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingWizard {
    #[must_use]
    pub fn new() -> Self {
        Self {
            step: WizardStep::SelectStudent,
            student: None,
            trainer: None,
            package: None,
            package_count: None,
            sessions: SessionSchedule::new(),
            pickup_mode: PickupMode::Pickup,
            pickup_addresses: None,
            pickup: None,
        }
    }

    // Accessors
    #[must_use]
    pub fn step(&self) -> WizardStep {
        self.step
    }

    #[must_use]
    pub fn student(&self) -> Option<&Student> {
        self.student.as_ref()
    }

    #[must_use]
    pub fn trainer(&self) -> Option<&Trainer> {
        self.trainer.as_ref()
    }

    /// User id of the selected trainer; package lists are keyed on it.
    #[must_use]
    pub fn trainer_user_id(&self) -> Option<TrainerUserId> {
        self.trainer.as_ref().map(|t| t.user_id)
    }

    #[must_use]
    pub fn package(&self) -> Option<&TrainerPackage> {
        self.package.as_ref()
    }

    #[must_use]
    pub fn sessions(&self) -> &SessionSchedule {
        &self.sessions
    }

    #[must_use]
    pub fn pickup_mode(&self) -> PickupMode {
        self.pickup_mode
    }

    /// Addresses offered for pickup: the selected student's, when it has any.
    #[must_use]
    pub fn pickup_addresses(&self) -> Option<&[Address]> {
        self.pickup_addresses.as_deref()
    }

    #[must_use]
    pub fn pickup(&self) -> Option<PickupLocation> {
        self.pickup
    }

    // Selections

    /// Record the student and move to trainer selection.
    ///
    /// Pickup defaults to the student's first address.
    pub fn select_student(&mut self, student: Student) {
        self.pickup_addresses = if student.user_addresses.is_empty() {
            None
        } else {
            Some(student.user_addresses.clone())
        };
        if self.pickup_mode == PickupMode::Pickup {
            self.pickup = self.first_student_address();
        }
        self.student = Some(student);
        self.step = WizardStep::SelectTrainer;
    }

    /// Record the trainer and move to package selection.
    ///
    /// Choosing a different trainer drops the package choice, since the
    /// package pool belongs to the trainer.
    pub fn select_trainer(&mut self, trainer: Trainer) {
        let changed = self.trainer_user_id() != Some(trainer.user_id);
        if changed {
            self.package = None;
            self.package_count = None;
            self.sessions.clear_limit();
        }
        if self.pickup_mode == PickupMode::DriverLocation {
            self.pickup = trainer_address(&trainer).map(PickupLocation::TrainerAddress);
        }
        self.trainer = Some(trainer);
        self.step = WizardStep::SelectPackage;
    }

    /// Record how many packages the latest fetch returned for `trainer`.
    ///
    /// Results for a trainer other than the selected one are stale and
    /// ignored; returns whether the count was applied.
    pub fn set_package_count(&mut self, trainer: TrainerUserId, count: usize) -> bool {
        if self.trainer_user_id() != Some(trainer) {
            return false;
        }
        self.package_count = Some(count);
        true
    }

    #[must_use]
    pub fn package_count(&self) -> Option<usize> {
        self.package_count
    }

    /// Record the package and move to scheduling.
    pub fn select_package(&mut self, package: TrainerPackage) {
        self.sessions.limit_to_package(package.number_of_sessions());
        self.package = Some(package);
        self.step = WizardStep::ScheduleSessions;
    }

    // Navigation

    /// Step back one step, keeping every selection.
    pub fn back(&mut self) {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
    }

    /// True when "Next" must be disabled on the current step.
    #[must_use]
    pub fn next_disabled(&self) -> bool {
        self.step == WizardStep::SelectPackage && self.package_count == Some(0)
    }

    /// Advance one step. Returns false when blocked or already on the last step.
    pub fn next(&mut self) -> bool {
        if self.next_disabled() {
            return false;
        }
        match self.step.next() {
            Some(next) => {
                self.step = next;
                true
            }
            None => false,
        }
    }

    // Sessions

    /// # Errors
    ///
    /// Returns `WizardError::Schedule` when the package limit is reached.
    pub fn add_session(&mut self) -> Result<(), WizardError> {
        Ok(self.sessions.add()?)
    }

    /// # Errors
    ///
    /// Returns `WizardError::Schedule` for the last slot or a bad index.
    pub fn remove_session(&mut self, index: usize) -> Result<(), WizardError> {
        Ok(self.sessions.remove(index)?)
    }

    /// # Errors
    ///
    /// Returns `WizardError::Schedule` for a bad index.
    pub fn set_session_start(&mut self, index: usize, raw: &str) -> Result<(), WizardError> {
        Ok(self.sessions.set_start(index, raw)?)
    }

    /// # Errors
    ///
    /// Returns `WizardError::Schedule` for a bad index.
    pub fn set_session_end(&mut self, index: usize, raw: &str) -> Result<(), WizardError> {
        Ok(self.sessions.set_end(index, raw)?)
    }

    // Pickup

    /// Switch between student pickup and meeting at the trainer's address.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::MissingTrainer` or `WizardError::NoTrainerAddress`
    /// when switching to driver location without a usable trainer address.
    pub fn set_pickup_mode(&mut self, mode: PickupMode) -> Result<(), WizardError> {
        match mode {
            PickupMode::Pickup => {
                self.pickup = self.first_student_address();
            }
            PickupMode::DriverLocation => {
                let trainer = self.trainer.as_ref().ok_or(WizardError::MissingTrainer)?;
                let address = trainer_address(trainer).ok_or(WizardError::NoTrainerAddress)?;
                self.pickup = Some(PickupLocation::TrainerAddress(address));
            }
        }
        self.pickup_mode = mode;
        Ok(())
    }

    /// Override the default pickup with another of the student's addresses.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::UnknownAddress` if `id` is not one of them.
    pub fn select_pickup_address(&mut self, id: AddressId) -> Result<(), WizardError> {
        let known = self
            .pickup_addresses
            .as_deref()
            .is_some_and(|addresses| addresses.iter().any(|a| a.id == id));
        if !known {
            return Err(WizardError::UnknownAddress(id));
        }
        self.pickup_mode = PickupMode::Pickup;
        self.pickup = Some(PickupLocation::StudentAddress(id));
        Ok(())
    }

    // Submission

    /// True when the final action may submit.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.step.is_last()
            && self.student.is_some()
            && self.trainer.is_some()
            && self.package.is_some()
    }

    /// Build the booking-creation request from the accumulated state.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::Missing*` for an absent selection, or
    /// `WizardError::Schedule` when a session time cannot be normalized.
    pub fn build_request(&self) -> Result<NewBooking, WizardError> {
        let student = self.student.as_ref().ok_or(WizardError::MissingStudent)?;
        let trainer = self.trainer.as_ref().ok_or(WizardError::MissingTrainer)?;
        let package = self.package.as_ref().ok_or(WizardError::MissingPackage)?;
        let sessions = self.sessions.to_requests()?;

        Ok(NewBooking {
            student_id: student.id,
            trainer_id: trainer.user_id,
            package_id: package.package_id,
            pickup_location: self.pickup,
            sessions,
        })
    }

    fn first_student_address(&self) -> Option<PickupLocation> {
        self.pickup_addresses
            .as_deref()
            .and_then(<[Address]>::first)
            .map(|a| PickupLocation::StudentAddress(a.id))
    }
}

fn trainer_address(trainer: &Trainer) -> Option<AddressId> {
    trainer.user.default_address.as_ref().map(|a| a.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Amount, PackageId, PackageInfo, SessionRequest, StudentId, TrainerId, TrainerProfile,
    };

    fn address(id: u64) -> Address {
        Address {
            id: AddressId::new(id),
            title: None,
            address: format!("{id} Main St"),
            lat: None,
            lng: None,
        }
    }

    fn student(id: u64, addresses: Vec<Address>) -> Student {
        Student {
            id: StudentId::new(id),
            name: format!("Student {id}"),
            email: format!("s{id}@example.com"),
            phone: None,
            photo_url: None,
            user_addresses: addresses,
        }
    }

    fn trainer(id: u64, user_id: u64) -> Trainer {
        Trainer {
            id: TrainerId::new(id),
            user_id: TrainerUserId::new(user_id),
            name: format!("Trainer {id}"),
            email: None,
            is_active: true,
            license_number: None,
            user: TrainerProfile::default(),
        }
    }

    fn package(id: u64, sessions: u32) -> TrainerPackage {
        TrainerPackage {
            package_id: PackageId::new(id),
            price: Amount::new(100.0),
            package: PackageInfo {
                number_of_sessions: sessions,
                translations: Vec::new(),
            },
        }
    }

    #[test]
    fn selections_advance_one_step_each() {
        let mut wizard = BookingWizard::new();
        assert_eq!(wizard.step(), WizardStep::SelectStudent);
        wizard.select_student(student(1, Vec::new()));
        assert_eq!(wizard.step(), WizardStep::SelectTrainer);
        wizard.select_trainer(trainer(2, 20));
        assert_eq!(wizard.step(), WizardStep::SelectPackage);
        wizard.select_package(package(3, 4));
        assert_eq!(wizard.step(), WizardStep::ScheduleSessions);
        assert!(wizard.next());
        assert_eq!(wizard.step(), WizardStep::SelectPickupLocation);
        assert!(!wizard.next());
    }

    #[test]
    fn back_keeps_later_selections() {
        let mut wizard = BookingWizard::new();
        wizard.select_student(student(1, Vec::new()));
        wizard.select_trainer(trainer(2, 20));
        wizard.select_package(package(3, 4));
        wizard.back();
        wizard.back();
        assert_eq!(wizard.step(), WizardStep::SelectTrainer);
        assert!(wizard.package().is_some());
        wizard.next();
        wizard.next();
        assert_eq!(wizard.step(), WizardStep::ScheduleSessions);
        assert_eq!(wizard.package().unwrap().package_id, PackageId::new(3));
    }

    #[test]
    fn back_on_first_step_is_a_no_op() {
        let mut wizard = BookingWizard::new();
        wizard.back();
        assert_eq!(wizard.step(), WizardStep::SelectStudent);
    }

    #[test]
    fn next_is_disabled_only_for_an_empty_package_list() {
        let mut wizard = BookingWizard::new();
        wizard.select_student(student(1, Vec::new()));
        wizard.select_trainer(trainer(2, 20));
        assert!(!wizard.next_disabled(), "not fetched yet");

        assert!(wizard.set_package_count(TrainerUserId::new(20), 0));
        assert!(wizard.next_disabled());
        assert!(!wizard.next());
        assert_eq!(wizard.step(), WizardStep::SelectPackage);

        wizard.set_package_count(TrainerUserId::new(20), 2);
        assert!(!wizard.next_disabled());
    }

    #[test]
    fn empty_package_list_does_not_gate_other_steps() {
        let mut wizard = BookingWizard::new();
        wizard.select_student(student(1, Vec::new()));
        wizard.select_trainer(trainer(2, 20));
        wizard.set_package_count(TrainerUserId::new(20), 0);
        wizard.back();
        assert!(!wizard.next_disabled());
    }

    #[test]
    fn stale_package_counts_are_ignored() {
        let mut wizard = BookingWizard::new();
        wizard.select_student(student(1, Vec::new()));
        wizard.select_trainer(trainer(2, 20));
        assert!(!wizard.set_package_count(TrainerUserId::new(99), 0));
        assert_eq!(wizard.package_count(), None);
    }

    #[test]
    fn changing_trainer_clears_package() {
        let mut wizard = BookingWizard::new();
        wizard.select_student(student(1, Vec::new()));
        wizard.select_trainer(trainer(2, 20));
        wizard.set_package_count(TrainerUserId::new(20), 1);
        wizard.select_package(package(3, 4));
        wizard.back();
        wizard.back();

        wizard.select_trainer(trainer(2, 20));
        assert!(wizard.package().is_some(), "same trainer keeps the package");

        wizard.back();
        wizard.select_trainer(trainer(5, 50));
        assert!(wizard.package().is_none());
        assert_eq!(wizard.package_count(), None);
        assert_eq!(wizard.sessions().max_slots(), None);
    }

    #[test]
    fn pickup_defaults_to_student_addresses() {
        let mut wizard = BookingWizard::new();
        let addresses = vec![address(7), address(8)];
        wizard.select_student(student(1, addresses.clone()));
        assert_eq!(wizard.pickup_addresses(), Some(addresses.as_slice()));
        assert_eq!(
            wizard.pickup(),
            Some(PickupLocation::StudentAddress(AddressId::new(7)))
        );

        wizard.back();
        wizard.select_student(student(2, Vec::new()));
        assert_eq!(wizard.pickup_addresses(), None);
        assert_eq!(wizard.pickup(), None);
    }

    #[test]
    fn pickup_can_be_overridden_before_submission() {
        let mut wizard = BookingWizard::new();
        wizard.select_student(student(1, vec![address(7), address(8)]));
        wizard.select_pickup_address(AddressId::new(8)).unwrap();
        assert_eq!(
            wizard.pickup(),
            Some(PickupLocation::StudentAddress(AddressId::new(8)))
        );
        assert_eq!(
            wizard.select_pickup_address(AddressId::new(99)),
            Err(WizardError::UnknownAddress(AddressId::new(99)))
        );
    }

    #[test]
    fn driver_location_uses_trainer_default_address() {
        let mut wizard = BookingWizard::new();
        wizard.select_student(student(1, vec![address(7)]));
        assert_eq!(
            wizard.set_pickup_mode(PickupMode::DriverLocation),
            Err(WizardError::MissingTrainer)
        );

        let mut with_address = trainer(2, 20);
        with_address.user.default_address = Some(address(30));
        wizard.select_trainer(with_address);
        wizard.set_pickup_mode(PickupMode::DriverLocation).unwrap();
        assert_eq!(
            wizard.pickup(),
            Some(PickupLocation::TrainerAddress(AddressId::new(30)))
        );

        wizard.set_pickup_mode(PickupMode::Pickup).unwrap();
        assert_eq!(
            wizard.pickup(),
            Some(PickupLocation::StudentAddress(AddressId::new(7)))
        );
    }

    #[test]
    fn driver_location_requires_trainer_address() {
        let mut wizard = BookingWizard::new();
        wizard.select_trainer(trainer(2, 20));
        assert_eq!(
            wizard.set_pickup_mode(PickupMode::DriverLocation),
            Err(WizardError::NoTrainerAddress)
        );
        assert_eq!(wizard.pickup_mode(), PickupMode::Pickup);
    }

    #[test]
    fn package_selection_limits_session_slots() {
        let mut wizard = BookingWizard::new();
        wizard.select_student(student(1, Vec::new()));
        wizard.select_trainer(trainer(2, 20));
        wizard.select_package(package(3, 4));
        wizard.add_session().unwrap();
        assert!(matches!(
            wizard.add_session(),
            Err(WizardError::Schedule(ScheduleError::TooMany { max: 2 }))
        ));
    }

    #[test]
    fn submission_requires_every_selection() {
        let mut wizard = BookingWizard::new();
        assert_eq!(wizard.build_request(), Err(WizardError::MissingStudent));
        wizard.select_student(student(1, Vec::new()));
        assert_eq!(wizard.build_request(), Err(WizardError::MissingTrainer));
        wizard.select_trainer(trainer(2, 20));
        assert_eq!(wizard.build_request(), Err(WizardError::MissingPackage));
        assert!(!wizard.can_submit());
    }

    #[test]
    fn built_request_matches_wire_shape() {
        let mut wizard = BookingWizard::new();
        wizard.select_student(student(1, vec![address(7)]));
        wizard.select_trainer(trainer(2, 20));
        wizard.select_package(package(3, 2));
        wizard.set_session_start(0, "2024-01-01T10:00").unwrap();
        wizard.set_session_end(0, "11:00").unwrap();
        wizard.next();
        assert!(wizard.can_submit());

        let request = wizard.build_request().unwrap();
        assert_eq!(
            request,
            NewBooking {
                student_id: StudentId::new(1),
                trainer_id: TrainerUserId::new(20),
                package_id: PackageId::new(3),
                pickup_location: Some(PickupLocation::StudentAddress(AddressId::new(7))),
                sessions: vec![SessionRequest {
                    start_time: "2024-01-01 10:00".into(),
                    end_time: "11:00".into(),
                    session_no: [1, 2],
                }],
            }
        );

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "student_id": 1,
                "trainer_id": 20,
                "package_id": 3,
                "pickup_location": 7,
                "sessions": [{"start_time": "2024-01-01 10:00", "end_time": "11:00", "session_no": [1, 2]}]
            })
        );
    }

    #[test]
    fn step_navigation_helpers() {
        assert_eq!(WizardStep::SelectStudent.prev(), None);
        assert_eq!(
            WizardStep::SelectPackage.next(),
            Some(WizardStep::ScheduleSessions)
        );
        assert_eq!(WizardStep::SelectPickupLocation.next(), None);
        assert!(WizardStep::SelectPickupLocation.is_last());
    }
}
