mod arbitrary;

mod scenarios;
