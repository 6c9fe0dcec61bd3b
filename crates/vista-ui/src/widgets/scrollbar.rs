use vista_engine::coords::Rect;

pub(crate) const BAR_WIDTH: f32 = 6.0;
const MIN_THUMB: f32 = 24.0;

/// Track and thumb rects along the right edge of `rect`, or `None` when
/// the content fits.
pub(crate) fn scrollbar_rects(rect: Rect, content_h: f32, offset: f32) -> Option<(Rect, Rect)> {
    let view_h = rect.size.y;
    if content_h <= view_h || view_h <= 0.0 {
        return None;
    }
    let x = rect.right() - BAR_WIDTH;
    let track = Rect::new(x, rect.origin.y, BAR_WIDTH, view_h);

    let thumb_h = (view_h * view_h / content_h).max(MIN_THUMB).min(view_h);
    let range = content_h - view_h;
    let t = (offset / range).clamp(0.0, 1.0);
    let thumb = Rect::new(x, rect.origin.y + t * (view_h - thumb_h), BAR_WIDTH, thumb_h);
    Some((track, thumb))
}
