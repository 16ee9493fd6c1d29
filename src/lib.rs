pub mod matchcore;
