use egui::{CentralPanel, Grid, ScrollArea, SidePanel, TopBottomPanel};

use crate::app::App;

const DESCRIPTION: &str = "PlotMyPSMC allows you to either import a parameter file \
or input your own PSMC files and the necessary options into this form; \
you always need to specify your plotting options.";

pub fn main_window(ctx: &egui::Context, app: &mut App) {
    let mut do_import = false;
    let mut do_save = false;
    let mut do_clear = false;
    let mut do_plot = false;

    SidePanel::left("options_panel")
        .min_width(320.0)
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.label(DESCRIPTION);
                ui.separator();

                ui.heading("Parameter file");
                Grid::new("param_file").num_columns(2).show(ui, |ui| {
                    ui.label("Path to parameter file");
                    ui.text_edit_singleline(&mut app.param_path);
                    ui.end_row();
                });
                do_import = ui.button("Import from parameter file").clicked();
                ui.separator();

                ui.heading("PSMC file");
                Grid::new("track_form").num_columns(2).show(ui, |ui| {
                    let form = &mut app.track_form;
                    ui.label("Path to PSMC file");
                    ui.text_edit_singleline(&mut form.path);
                    ui.end_row();
                    ui.label("Generation time");
                    ui.text_edit_singleline(&mut form.generation_time);
                    ui.end_row();
                    ui.label("Mutation rate");
                    ui.text_edit_singleline(&mut form.mutation_rate);
                    ui.end_row();
                    ui.label("Bin size");
                    ui.text_edit_singleline(&mut form.bin_size);
                    ui.end_row();
                    ui.label("Sample name");
                    ui.text_edit_singleline(&mut form.label);
                    ui.end_row();
                    ui.label("Line color");
                    ui.text_edit_singleline(&mut form.color);
                    ui.end_row();
                });
                ui.horizontal(|ui| {
                    do_save = ui.button("Save options").clicked();
                    do_clear = ui.button("Clear all options").clicked();
                });
                ui.separator();

                ui.heading("Plotting options");
                Grid::new("plot_form").num_columns(2).show(ui, |ui| {
                    let form = &mut app.plot_form;
                    ui.label("X axis minimum value");
                    ui.text_edit_singleline(&mut form.x_min);
                    ui.end_row();
                    ui.label("X axis maximum value");
                    ui.text_edit_singleline(&mut form.x_max);
                    ui.end_row();
                    ui.label("Y axis minimum value");
                    ui.text_edit_singleline(&mut form.y_min);
                    ui.end_row();
                    ui.label("Y axis maximum value");
                    ui.text_edit_singleline(&mut form.y_max);
                    ui.end_row();
                    ui.label("Bootstrap transparency");
                    ui.text_edit_singleline(&mut form.transparency);
                    ui.end_row();
                    ui.label("Plot name");
                    ui.text_edit_singleline(&mut form.plot_name);
                    ui.end_row();
                    ui.label("Plot in log scale?");
                    ui.horizontal(|ui| {
                        ui.checkbox(&mut form.x_log, "x");
                        ui.checkbox(&mut form.y_log, "y");
                    });
                    ui.end_row();
                    ui.label("Plot LGM?");
                    ui.checkbox(&mut form.show_lgm, "");
                    ui.end_row();
                });
                do_plot = ui.button("Plot PSMC").clicked();
            });
        });

    TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
        ui.label(&app.status);
    });

    CentralPanel::default().show(ctx, |ui| match &app.preview {
        Some(texture) => {
            ui.image((texture.id(), texture.size_vec2()));
        }
        None => {
            ui.centered_and_justified(|ui| {
                ui.label("No plot yet.");
            });
        }
    });

    if do_import {
        app.import_parameter_file();
    }
    if do_save {
        app.save_options();
    }
    if do_clear {
        app.clear_options();
    }
    if do_plot {
        app.plot(ctx);
    }
}
