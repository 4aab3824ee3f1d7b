mod sdl_printer_tests;
