pub mod postcode;
