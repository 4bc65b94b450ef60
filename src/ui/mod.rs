pub mod ripple_screen;
