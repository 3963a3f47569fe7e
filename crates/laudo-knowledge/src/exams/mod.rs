pub mod abdomen;
pub mod female_pelvis;
pub mod obstetric_first;
pub mod obstetric_later;
pub mod thyroid;
