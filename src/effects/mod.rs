pub(crate) mod ripple;
