use geng::Key;

use crate::{controls::Controls, hud::Hud, prelude::*, render::GameRender};

pub struct Game {
    assets: Rc<Assets>,
    config: Config,
    render: GameRender,
    model: Model,
    controls: Controls,
    hud: Hud,
    transition: Option<geng::state::Transition>,
}

impl Game {
    pub fn new(geng: &Geng, assets: &Rc<Assets>, config: Config) -> Result<Self, FighterError> {
        let model = Model::new(config.clone(), &assets.textures)?;
        Ok(Self {
            assets: assets.clone(),
            render: GameRender::new(geng, assets, config.viewport),
            hud: Hud::new(model.countdown.seconds_left()),
            controls: Controls::new(),
            model,
            config,
            transition: None,
        })
    }

    fn rematch(&mut self) {
        match Model::new(self.config.clone(), &self.assets.textures) {
            Ok(model) => {
                self.hud = Hud::new(model.countdown.seconds_left());
                self.model = model;
                self.controls.reset();
            }
            Err(err) => self.fail(err),
        }
    }

    fn fail(&mut self, err: FighterError) {
        log::error!("Match aborted: {}", err);
        self.transition = Some(geng::state::Transition::Pop);
    }
}

impl geng::State for Game {
    fn transition(&mut self) -> Option<geng::state::Transition> {
        self.transition.take()
    }

    fn handle_event(&mut self, event: geng::Event) {
        if geng_utils::key::is_event_press(&event, [Key::F3]) {
            self.render.show_hitboxes = !self.render.show_hitboxes;
            return;
        }
        if self.model.is_over() && geng_utils::key::is_event_press(&event, [Key::R, Key::Enter])
        {
            self.rematch();
            return;
        }

        let dead = [
            self.model.fighter(FighterId::Player).dead,
            self.model.fighter(FighterId::Enemy).dead,
        ];
        self.controls.handle_event(&event, dead);
    }

    fn update(&mut self, delta_time: f64) {
        let delta_time = Time::new(delta_time as _);
        self.model.update_countdown(delta_time, &mut self.hud);
        self.hud.update(delta_time);
    }

    fn draw(&mut self, framebuffer: &mut ugli::Framebuffer) {
        let input = self.controls.snapshot();
        let result = {
            let mut renderer = self.render.frame(framebuffer);
            self.model.tick(&input, &mut renderer, &mut self.hud)
        };
        if let Err(err) = result {
            self.fail(err);
            return;
        }

        if self.render.show_hitboxes {
            self.render.draw_hitboxes(&self.model, framebuffer);
        }
        self.render.draw_hud(&self.hud, framebuffer);
    }
}
