use crate::domain::model::{DerivedFeatures, PassengerInput, PredictionRecord, Sex, Title};
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};

pub const AGE_RANGE: (f64, f64) = (0.0, 90.0);
pub const FAMILY_COUNT_RANGE: (u8, u8) = (0, 10);
pub const FARE_RANGE: (f64, f64) = (0.0, 600.0);

pub fn derive_features(passenger: &PassengerInput) -> DerivedFeatures {
    let family_size =
        u32::from(passenger.siblings_spouses) + u32::from(passenger.parents_children) + 1;
    let is_alone = u8::from(family_size == 1);
    // 沒有收集稱謂欄位，只能用性別近似
    let title = match passenger.sex {
        Sex::Male => Title::Mr,
        Sex::Female => Title::Miss,
    };

    DerivedFeatures {
        family_size,
        is_alone,
        title,
    }
}

/// Assemble the single row sent to the predictor. Raw fields are copied
/// unchanged; derived fields are recomputed on every call.
pub fn build_record(passenger: &PassengerInput) -> PredictionRecord {
    let derived = derive_features(passenger);

    PredictionRecord {
        pclass: passenger.ticket_class.as_u8(),
        sex: passenger.sex,
        age: passenger.age,
        sib_sp: passenger.siblings_spouses,
        parch: passenger.parents_children,
        fare: passenger.fare,
        embarked: passenger.embark_port,
        title: derived.title,
        family_size: derived.family_size,
        is_alone: derived.is_alone,
    }
}

impl Validate for PassengerInput {
    fn validate(&self) -> Result<()> {
        validate_range("Age", self.age, AGE_RANGE.0, AGE_RANGE.1)?;
        validate_range(
            "SibSp",
            self.siblings_spouses,
            FAMILY_COUNT_RANGE.0,
            FAMILY_COUNT_RANGE.1,
        )?;
        validate_range(
            "Parch",
            self.parents_children,
            FAMILY_COUNT_RANGE.0,
            FAMILY_COUNT_RANGE.1,
        )?;
        validate_range("Fare", self.fare, FARE_RANGE.0, FARE_RANGE.1)?;
        Ok(())
    }
}
