pub mod alphabet;
pub mod national_prefixes;
