use crate::ui::app::App;
use crate::ui::hello_world::HelloWorld;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let translator = app.translator();
    frame.render_widget(Clear, area);
    frame.render_widget(HelloWorld::new(&translator, app.switcher()), area);
}
